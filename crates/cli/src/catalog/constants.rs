//! Built-in frame tables for status lines and progress bars

/// Braille spinner status line
pub const LOADING_FRAMES: &[&str] = &[
    "⠋ LOADING ┃ Fetching resources...",
    "⠙ LOADING ┃ Fetching resources...",
    "⠹ LOADING ┃ Fetching resources...",
    "⠸ LOADING ┃ Fetching resources...",
    "⠼ LOADING ┃ Fetching resources...",
    "⠴ LOADING ┃ Fetching resources...",
    "⠦ LOADING ┃ Fetching resources...",
    "⠧ LOADING ┃ Fetching resources...",
    "⠇ LOADING ┃ Fetching resources...",
    "⠏ LOADING ┃ Fetching resources...",
];

pub const PROCESSING_FRAMES: &[&str] = &[
    "◐ PROCESSING ┃ Executing pipeline stage 1/4...",
    "◓ PROCESSING ┃ Executing pipeline stage 1/4...",
    "◑ PROCESSING ┃ Executing pipeline stage 2/4...",
    "◒ PROCESSING ┃ Executing pipeline stage 2/4...",
    "◐ PROCESSING ┃ Executing pipeline stage 3/4...",
    "◓ PROCESSING ┃ Executing pipeline stage 3/4...",
    "◑ PROCESSING ┃ Executing pipeline stage 4/4...",
    "◒ PROCESSING ┃ Executing pipeline stage 4/4...",
];

pub const BUILDING_FRAMES: &[&str] = &[
    "┤ BUILDING ┃ Compiling source files...",
    "┴ BUILDING ┃ Compiling source files...",
    "┬ BUILDING ┃ Resolving dependencies...",
    "├ BUILDING ┃ Resolving dependencies...",
    "┼ BUILDING ┃ Bundling modules...",
    "│ BUILDING ┃ Bundling modules...",
    "┤ BUILDING ┃ Optimizing chunks...",
    "┴ BUILDING ┃ Optimizing chunks...",
];

pub const CONNECTING_FRAMES: &[&str] = &[
    "⣾ CONNECTING ┃ Establishing TCP handshake...",
    "⣽ CONNECTING ┃ Establishing TCP handshake...",
    "⣻ CONNECTING ┃ Negotiating TLS...",
    "⢿ CONNECTING ┃ Negotiating TLS...",
    "⡿ CONNECTING ┃ Authenticating session...",
    "⣟ CONNECTING ┃ Authenticating session...",
    "⣯ CONNECTING ┃ Synchronizing state...",
    "⣷ CONNECTING ┃ Synchronizing state...",
];

pub const TESTING_FRAMES: &[&str] = &[
    "▹ TESTING ┃ Running unit tests...",
    "▸ TESTING ┃ Running unit tests...",
    "▹ TESTING ┃ Running integration tests...",
    "▸ TESTING ┃ Running integration tests...",
    "▹ TESTING ┃ Running e2e tests...",
    "▸ TESTING ┃ Running e2e tests...",
    "▹ TESTING ┃ Calculating coverage...",
    "▸ TESTING ┃ Calculating coverage...",
];

pub const VERIFYING_FRAMES: &[&str] = &[
    "● VERIFYING ┃ Checking digital signatures...",
    "◐ VERIFYING ┃ Checking digital signatures...",
    "◓ VERIFYING ┃ Validating checksums...",
    "◑ VERIFYING ┃ Validating checksums...",
    "◒ VERIFYING ┃ Confirming integrity...",
    "● VERIFYING ┃ Confirming integrity...",
];

/// Play-once compilation progress bar
pub const BUILD_PROGRESS_FRAMES: &[&str] = &[
    "[▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱] 03% ┃ Initializing compiler...",
    "[▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱] 12% ┃ Parsing TypeScript modules...",
    "[▰▰▰▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱] 24% ┃ Type checking definitions...",
    "[▰▰▰▰▰▰▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱] 38% ┃ Transpiling to JavaScript...",
    "[▰▰▰▰▰▰▰▰▰▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱] 51% ┃ Bundling dependencies...",
    "[▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱▱▱▱] 63% ┃ Optimizing chunks...",
    "[▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▱▱▱▱▱▱▱▱▱▱▱▱] 77% ┃ Minifying output...",
    "[▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▱▱▱▱▱▱▱▱] 89% ┃ Generating source maps...",
    "[▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰▰] 100% ┃ Build complete. Ready.",
];

/// Play-once test suite counter
pub const TEST_PROGRESS_FRAMES: &[&str] = &[
    "[░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░] 000/847 ┃ Starting test suite...",
    "[▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░░] 042/847 ┃ auth.service.spec.ts",
    "[▓▓░░░░░░░░░░░░░░░░░░░░░░░░░░░░] 127/847 ┃ user.controller.spec.ts",
    "[▓▓▓▓░░░░░░░░░░░░░░░░░░░░░░░░░░] 234/847 ┃ database.integration.spec.ts",
    "[▓▓▓▓▓▓░░░░░░░░░░░░░░░░░░░░░░░░] 391/847 ┃ api.endpoints.spec.ts",
    "[▓▓▓▓▓▓▓▓░░░░░░░░░░░░░░░░░░░░░░] 518/847 ┃ middleware.chain.spec.ts",
    "[▓▓▓▓▓▓▓▓▓▓░░░░░░░░░░░░░░░░░░░░] 623/847 ┃ validation.pipes.spec.ts",
    "[▓▓▓▓▓▓▓▓▓▓▓▓░░░░░░░░░░░░░░░░░░] 741/847 ┃ guards.security.spec.ts",
    "[▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓] 847/847 ┃ All tests passed. Coverage: 94.2%",
];

/// Interval used by the progress bars; status spinners use the playback default
pub const BUILD_PROGRESS_INTERVAL_MS: u64 = 400;
