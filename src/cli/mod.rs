use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send one prompt and print the resulting transcript
    Ask { prompt: String },

    /// Start an interactive conversation on stdin (type /quit to leave)
    Chat,
}
