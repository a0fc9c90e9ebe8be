use clap::Subcommand;

pub mod list;
pub mod play;
pub mod show;

pub use play::PlayArgs;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available frame sets
    #[command(visible_alias = "ls")]
    List,

    /// Play a frame set
    #[command(visible_alias = "p")]
    Play(PlayArgs),

    /// Print every frame of a set, one per line
    Show {
        /// Frame set name
        name: String,
    },
}

impl Commands {
    pub async fn execute(
        self,
        catalog: &crate::catalog::Catalog,
        settings: &crate::config::Settings,
    ) -> anyhow::Result<()> {
        match self {
            Commands::List => list::execute(catalog, &mut std::io::stdout().lock())?,
            Commands::Play(args) => play::execute(args, catalog, settings).await?,
            Commands::Show { name } => show::execute(catalog, &name, std::io::stdout())?,
        }
        Ok(())
    }
}
