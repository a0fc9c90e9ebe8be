use crate::catalog::Catalog;
use anyhow::Result;
use bdev_animator::sink::{FrameSink, WriterSink};
use std::io::Write;

/// Print every frame of `name` through a line sink
pub fn execute<W: Write + Send>(catalog: &Catalog, name: &str, out: W) -> Result<()> {
    let set = catalog.get(name)?;
    let mut sink = WriterSink::new(out);
    for frame in set.frames.iter() {
        sink.write_frame(frame)?;
    }
    sink.finish()?;
    Ok(())
}
