use clap::{CommandFactory, Parser, Subcommand};
use once_cell::sync::Lazy;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: Lazy<String> = Lazy::new(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    });
    &VERSION_STRING
}

#[derive(Parser, Debug)]
#[command(
    name = "stask",
    bin_name = "stask",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "A little stateful task runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    State,
    Task,
    Profile,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::State => "State Commands:",
            CommandGroup::Task => "Task Commands:",
            CommandGroup::Profile => "Profile Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "state" | "set" | "clear" => Some(CommandGroup::State),
            "run" | "dryrun" | "tasks" | "add" | "remove" => Some(CommandGroup::Task),
            "profile" => Some(CommandGroup::Profile),
            "init" | "staskfile" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::State,
            CommandGroup::Task,
            CommandGroup::Profile,
            CommandGroup::Misc,
        ]
    }
}

/// Long-form help pages that aren't tied to a single command.
pub struct HelpTopic {
    pub name: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

pub static HELP_TOPICS: Lazy<Vec<HelpTopic>> = Lazy::new(|| {
    vec![
        HelpTopic {
            name: "syntax",
            summary: "How to author stask tasks",
            body: "\
stask task syntax:
    your staskfile has a \"Tasks\" object, every field in that object is a runnable task

    task definitions look like this:
        \"my-task\": \"something {state} something else {other-state}\"

    stored state can be used in a task by wrapping its name in braces {}
    braces cannot be nested, and every { needs a matching }

    tasks can also be added from the command line:
        stask add my-task \"echo {greeting}\"",
        },
        HelpTopic {
            name: "shell",
            summary: "How to configure the shell and shell flags stask uses",
            body: "\
stask shell config:
    stask requires that a shell be explicitly set via environment variables
    on unix systems this is typically already done via the \"SHELL\" environment variable
    stask considers 2 variables to determine the shell:
        STASK_SHELL   custom shell used only by stask
        SHELL         system default on unix systems (used when STASK_SHELL is not set)

    stask passes flags to the shell to execute your tasks
    by default it passes \"-ic\", you can customize the flags with this variable:
        STASK_SHELL_FLAGS    custom flags passed to the shell

    the complete command executed by \"stask run\" looks like this:
        <$STASK_SHELL (or $SHELL)> <$STASK_SHELL_FLAGS> \"<task>\"",
        },
    ]
});

pub fn find_topic(name: &str) -> Option<&'static HelpTopic> {
    HELP_TOPICS.iter().find(|t| t.name == name)
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("stask {version}\n"));
    output.push_str("A little stateful task runner\n");
    output.push('\n');
    output.push_str("state and tasks are stored in your staskfile, use \"stask staskfile\" to get its path\n");
    output.push('\n');
    output.push_str("Usage: stask [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Help Topics:\n");
    for topic in HELP_TOPICS.iter() {
        output.push_str(&format!("  {:<12} {}\n", topic.name, topic.summary));
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Renders help for a subcommand, or `None` if there is no such subcommand.
pub fn render_command_help(name: &str) -> Option<String> {
    let mut cmd = Cli::command();
    let help = cmd
        .get_subcommands_mut()
        .find(|sc| sc.get_name() == name)
        .map(|sc| sc.render_help().to_string());
    help
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    State(StateCommands),

    #[command(flatten)]
    Task(TaskCommands),

    #[command(flatten)]
    Profile(ProfileCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum StateCommands {
    /// Print current stored state
    #[command(display_order = 1)]
    State,

    /// Set a stored state value
    #[command(display_order = 2)]
    Set {
        /// Name of the state value
        name: String,

        /// Value to store
        value: String,
    },

    /// Remove a stored state value
    #[command(display_order = 3)]
    Clear {
        /// Name of the state value
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Run a task using stored state
    #[command(display_order = 10)]
    Run {
        /// Name of the task
        task: String,
    },

    /// Print the command that would be executed with "stask run"
    #[command(display_order = 11)]
    Dryrun {
        /// Name of the task
        task: String,
    },

    /// Print list of available tasks
    #[command(alias = "ls", display_order = 12)]
    Tasks,

    /// Add or replace a task
    #[command(display_order = 13)]
    Add {
        /// Name of the task
        name: String,

        /// Task template, e.g. "echo {greeting}"
        template: String,
    },

    /// Remove a task
    #[command(alias = "rm", display_order = 14)]
    Remove {
        /// Name of the task
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List, show, load, save and delete profiles
    #[command(display_order = 20)]
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// List available profiles
    List,

    /// Print the state stored in a profile
    Show { name: String },

    /// Apply the state stored in a profile, overwriting only values in the profile
    Load { name: String },

    /// Save current state as a profile
    Save { name: String },

    /// Delete a profile
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Create a default staskfile
    #[command(display_order = 30)]
    Init,

    /// Print the path to your staskfile
    #[command(display_order = 31)]
    Staskfile,

    /// Show help for a command or topic
    #[command(display_order = 32)]
    Help {
        /// Command or topic (syntax, shell)
        topic: Option<String>,
    },
}
