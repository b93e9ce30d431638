use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rn-prepare completions bash > ~/.bash_completion.d/rn-prepare\n\n\
                  Generate zsh completions:\n    rn-prepare completions zsh > ~/.zfunc/_rn-prepare\n\n\
                  Generate fish completions:\n    rn-prepare completions fish > ~/.config/fish/completions/rn-prepare.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
