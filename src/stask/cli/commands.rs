//! # CLI Layer
//!
//! This module is **one possible UI client** for stask. It is the only place
//! that:
//! - Parses arguments
//! - Reads the environment (through [`StaskConfig::from_env`])
//! - Prints to stdout or stderr
//! - Spawns the shell and chooses the exit code
//!
//! Everything else is a call into [`StaskApi`] followed by a `print_*` of the
//! returned `CmdResult`.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: `env_logger` setup, `--verbose` raises the level
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::print::{print_changes, print_messages, print_names, print_values};
use super::setup::{
    find_topic, print_grouped_help, render_command_help, Cli, Commands, MiscCommands,
    ProfileAction, ProfileCommands, StateCommands, TaskCommands,
};
use super::shell::run_task;
use clap::Parser;
use log::{debug, LevelFilter};
use stask::api::StaskApi;
use stask::config::StaskConfig;
use stask::error::Result;
use stask::store::fs::FileStore;

struct AppContext {
    api: StaskApi<FileStore>,
    config: StaskConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command {
        Some(command) => command,
        None => {
            print_grouped_help();
            std::process::exit(1);
        }
    };

    // Help never touches the staskfile
    if let Commands::Misc(MiscCommands::Help { topic }) = command {
        return handle_help(topic);
    }

    let mut ctx = init_context();
    debug!("command: {:?}", command);

    match command {
        Commands::State(cmd) => match cmd {
            StateCommands::State => handle_state(&ctx),
            StateCommands::Set { name, value } => handle_set(&mut ctx, &name, &value),
            StateCommands::Clear { name } => handle_clear(&mut ctx, &name),
        },
        Commands::Task(cmd) => match cmd {
            TaskCommands::Run { task } => handle_run(&ctx, &task),
            TaskCommands::Dryrun { task } => handle_dryrun(&ctx, &task),
            TaskCommands::Tasks => handle_tasks(&ctx),
            TaskCommands::Add { name, template } => handle_add(&mut ctx, &name, &template),
            TaskCommands::Remove { name } => handle_remove(&mut ctx, &name),
        },
        Commands::Profile(ProfileCommands::Profile { action }) => match action {
            ProfileAction::List => handle_profile_list(&ctx),
            ProfileAction::Show { name } => handle_profile_show(&ctx, &name),
            ProfileAction::Load { name } => handle_profile_load(&mut ctx, &name),
            ProfileAction::Save { name } => handle_profile_save(&mut ctx, &name),
            ProfileAction::Delete { name } => handle_profile_delete(&mut ctx, &name),
        },
        Commands::Misc(cmd) => match cmd {
            MiscCommands::Init => handle_init(&mut ctx),
            MiscCommands::Staskfile => handle_staskfile(&ctx),
            MiscCommands::Help { topic } => handle_help(topic),
        },
    }
}

/// Warnings only by default, debug with `--verbose`. `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn init_context() -> AppContext {
    let config = StaskConfig::from_env();
    debug!("staskfile: {}", config.staskfile_path.display());

    AppContext {
        api: StaskApi::new(FileStore::new(config.staskfile_path.clone())),
        config,
    }
}

fn handle_state(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.state()?;
    let values = result.values.unwrap_or_default();
    print_values("stask state:", &values, "no state stored in staskfile");
    Ok(())
}

fn handle_set(ctx: &mut AppContext, name: &str, value: &str) -> Result<()> {
    let result = ctx.api.set_state(name, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.clear_state(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_run(ctx: &AppContext, task: &str) -> Result<()> {
    let result = ctx.api.render_task(task)?;
    let rendered = result.rendered.unwrap_or_default();

    let code = run_task(&ctx.config, &rendered)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn handle_dryrun(ctx: &AppContext, task: &str) -> Result<()> {
    let result = ctx.api.render_task(task)?;
    println!("{}", result.rendered.unwrap_or_default());
    Ok(())
}

fn handle_tasks(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tasks()?;
    print_names("stask tasks:", &result.names, "no tasks found in staskfile");
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: &str, template: &str) -> Result<()> {
    let result = ctx.api.add_task(name, template)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.remove_task(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_profile_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_profiles()?;
    print_names(
        "saved profiles:",
        &result.names,
        "no profiles stored in staskfile",
    );
    Ok(())
}

fn handle_profile_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show_profile(name)?;
    let values = result.values.unwrap_or_default();
    print_values(
        &format!("{} - profile state:", name),
        &values,
        &format!("profile '{}' is empty", name),
    );
    Ok(())
}

fn handle_profile_load(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.load_profile(name)?;
    print_changes(name, &result.changes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_profile_save(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.save_profile(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_profile_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_profile(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_staskfile(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.staskfile_path().display());
    Ok(())
}

fn handle_help(topic: Option<String>) -> Result<()> {
    let Some(topic) = topic else {
        print_grouped_help();
        return Ok(());
    };

    if let Some(page) = find_topic(&topic) {
        println!("{}", page.body);
    } else if let Some(help) = render_command_help(&topic) {
        print!("{}", help);
    } else {
        eprintln!("error: unexpected help topic '{}'", topic);
        eprintln!("    use \"stask --help\" for information");
        std::process::exit(1);
    }
    Ok(())
}
