// Handlers for CLI subcommands. main.rs parses arguments and loads the
// problem; each module here turns a problem into printable output.

pub mod path;
pub mod plan;
