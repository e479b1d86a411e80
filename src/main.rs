use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use taskboard_client::api::{AuthApi, ProjectsApi, WorkspacesApi};
use taskboard_client::config::Config;
use taskboard_client::models::{
    ChangePasswordRequest, LoginRequest, RefreshRequest, RegisterRequest, WorkspaceForm,
};
use taskboard_client::pages::{
    DeleteOutcome, ItemsPerPage, SubmitOutcome, WorkspacesBody, WorkspacesPage, WorkspacesView,
};
use taskboard_client::services::{
    Confirmer, FixedConfirmer, PageContext, StdinConfirmer, TerminalNotifier, TerminalViewport,
    WorkspaceSource,
};
use taskboard_client::validation::{FormValidation, get_password_strength};
use taskboard_client::{ClientState, init_tracing};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn cli() -> Command {
    let yes = Arg::new("yes")
        .short('y')
        .long("yes")
        .help("Answer yes to every confirmation prompt")
        .action(ArgAction::SetTrue);
    let name = Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .required(true);
    let description = Arg::new("description")
        .short('d')
        .long("description")
        .value_name("TEXT")
        .default_value("");

    Command::new("taskboard")
        .version("0.1.0")
        .about("Terminal client for the taskboard workspace API")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .global(true)
                .help("API base URL, overrides API_BASE_URL"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .value_name("TOKEN")
                .global(true)
                .help("Bearer token, overrides ACCESS_TOKEN"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("console")
                .about("Interactive workspaces page")
                .arg(yes.clone()),
        )
        .subcommand(Command::new("list").about("List workspaces"))
        .subcommand(
            Command::new("create")
                .about("Create a workspace")
                .arg(name.clone())
                .arg(description.clone()),
        )
        .subcommand(
            Command::new("update")
                .about("Update a workspace")
                .arg(Arg::new("id").required(true))
                .arg(name)
                .arg(description),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a workspace")
                .arg(Arg::new("id").required(true))
                .arg(yes),
        )
        .subcommand(
            Command::new("projects")
                .about("List the projects of a workspace")
                .arg(Arg::new("workspace").required(true)),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and print the access token")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("refresh")
                .about("Exchange a refresh token for a new access token")
                .arg(Arg::new("refresh-token").required(true)),
        )
        .subcommand(
            Command::new("change-password")
                .about("Change the password of the logged-in user")
                .arg(Arg::new("current").long("current").required(true))
                .arg(Arg::new("new").long("new").required(true)),
        )
        .subcommand(
            Command::new("strength")
                .about("Score a password")
                .arg(Arg::new("password").required(true)),
        )
}

fn arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

#[tokio::main]
async fn main() -> CliResult {
    let matches = cli().get_matches();

    let mut config = Config::load()?;
    config.apply_overrides(
        matches.get_one::<String>("base-url").cloned(),
        matches.get_one::<String>("token").cloned(),
    );
    config.validate()?;
    init_tracing(&config);

    let state = ClientState::new(config)?;
    tracing::debug!(base_url = state.api_url.base_url(), "client ready");

    match matches.subcommand() {
        Some(("console", sub)) => run_console(&state, sub.get_flag("yes")).await,
        Some(("list", _)) => {
            let workspaces = WorkspacesApi::list(&state.api).await?;
            if workspaces.is_empty() {
                println!("No workspaces yet");
            }
            for workspace in &workspaces {
                println!(
                    "{}\t{}\t{} members\t{} Projects",
                    workspace.id, workspace.name, workspace.member_count, workspace.project_count
                );
            }
            Ok(())
        }
        Some(("create", sub)) => {
            let form = WorkspaceForm::new(arg(sub, "name"), arg(sub, "description"));
            check_form(&form)?;
            let workspace = WorkspacesApi::create(&state.api, &form).await?;
            println!("✅ Workspace created successfully ({})", workspace.id);
            Ok(())
        }
        Some(("update", sub)) => {
            let form = WorkspaceForm::new(arg(sub, "name"), arg(sub, "description"));
            check_form(&form)?;
            let workspace = WorkspacesApi::update(&state.api, &arg(sub, "id"), &form).await?;
            println!("✅ Workspace updated successfully ({})", workspace.id);
            Ok(())
        }
        Some(("delete", sub)) => {
            let confirmer = confirmer(sub.get_flag("yes"));
            if !confirmer.confirm("Are you sure you want to delete this workspace?") {
                return Ok(());
            }
            WorkspacesApi::delete(&state.api, &arg(sub, "id")).await?;
            println!("✅ Workspace deleted successfully");
            Ok(())
        }
        Some(("projects", sub)) => {
            let workspace_id = arg(sub, "workspace");
            let projects = ProjectsApi::list(&state.api, &workspace_id).await?;
            if projects.is_empty() {
                println!("No projects yet");
            }
            for project in &projects {
                println!(
                    "{}\t{}\t{}",
                    project.id,
                    project.name,
                    project.description.as_deref().unwrap_or("")
                );
            }
            Ok(())
        }
        Some(("register", sub)) => {
            let req = RegisterRequest {
                name: arg(sub, "name"),
                email: arg(sub, "email"),
                password: arg(sub, "password"),
            };
            let response = AuthApi::register(&state.api, &req).await?;
            println!("✅ {}", response.message.as_deref().unwrap_or("Registered"));
            print_tokens(response.access_token.as_deref(), response.refresh_token.as_deref());
            Ok(())
        }
        Some(("login", sub)) => {
            let req = LoginRequest {
                email: arg(sub, "email"),
                password: arg(sub, "password"),
            };
            let response = AuthApi::login(&state.api, &req).await?;
            print_tokens(response.access_token.as_deref(), response.refresh_token.as_deref());
            Ok(())
        }
        Some(("refresh", sub)) => {
            let req = RefreshRequest {
                refresh_token: arg(sub, "refresh-token"),
            };
            let response = AuthApi::refresh(&state.api, &req).await?;
            print_tokens(response.access_token.as_deref(), response.refresh_token.as_deref());
            Ok(())
        }
        Some(("change-password", sub)) => {
            let req = ChangePasswordRequest {
                current_password: arg(sub, "current"),
                new_password: arg(sub, "new"),
            };
            AuthApi::change_password(&state.api, &req).await?;
            println!("✅ Password changed");
            Ok(())
        }
        Some(("strength", sub)) => {
            let strength = get_password_strength(&arg(sub, "password"));
            println!(
                "{} (level {}, {}/5 checks)",
                strength.label, strength.level, strength.checks_passed
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

fn confirmer(assume_yes: bool) -> Arc<dyn Confirmer> {
    if assume_yes {
        Arc::new(FixedConfirmer::accept())
    } else {
        Arc::new(StdinConfirmer)
    }
}

fn check_form(form: &WorkspaceForm) -> CliResult {
    let errors = form.validate_fields();
    if errors.is_empty() {
        return Ok(());
    }
    for (field, message) in errors.iter() {
        eprintln!("❌ {}: {}", field, message);
    }
    Err(taskboard_client::error::AppError::InvalidForm(errors).into())
}

fn print_tokens(access: Option<&str>, refresh: Option<&str>) {
    if let Some(token) = access {
        println!("ACCESS_TOKEN={}", token);
    }
    if let Some(token) = refresh {
        println!("REFRESH_TOKEN={}", token);
    }
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_help() {
    println!("Available commands:");
    println!("  list               - Reload and show workspaces");
    println!("  page <n>           - Go to page n");
    println!("  next | prev        - Next or previous page");
    println!("  size <n>           - Items per page (6, 12, 24, 48)");
    println!("  new                - Open the create form");
    println!("  edit <id>          - Open the edit form");
    println!("  name <text>        - Set the form name");
    println!("  desc <text>        - Set the form description");
    println!("  submit | cancel    - Submit or close the form");
    println!("  delete <id>        - Delete a workspace");
    println!("  help               - Show this help");
    println!("  quit               - Quit");
}

fn render(view: &WorkspacesView) {
    println!("\n{}", view.title);
    println!("{}  {}\n", view.subtitle, view.create);
    match &view.body {
        WorkspacesBody::Loading => println!("Loading..."),
        WorkspacesBody::Error { message, retry } => println!("{}  {}", message, retry),
        WorkspacesBody::Empty { create } => {
            println!("No workspaces yet");
            println!("Get started by creating your first workspace  {}", create);
        }
        WorkspacesBody::Grid { cards, pagination } => {
            for card in cards {
                println!("{}\n", card.render());
            }
            if let Some(bar) = pagination {
                println!("{}", bar.render());
            }
        }
    }

    if let Some(form) = &view.form {
        println!("\n{}", form.modal.header());
        println!("  Workspace Name * {}: {}", form.name_counter, form.name);
        if let Some(error) = form.errors.get("name") {
            println!("    ❌ {}", error);
        }
        println!("  Description {}: {}", form.description_counter, form.description);
        if let Some(error) = form.errors.get("description") {
            println!("    ❌ {}", error);
        }
        println!("  {} {}", form.submit, form.cancel);
    }
}

async fn run_console(state: &ClientState, assume_yes: bool) -> CliResult {
    let context = PageContext::new(
        Arc::new(TerminalNotifier),
        confirmer(assume_yes),
        Arc::new(TerminalViewport),
    );
    let mut page: WorkspacesPage<WorkspaceSource> = state.workspaces_page(context);
    if let Err(e) = page.load().await {
        tracing::warn!(error = %e, "initial load failed");
    }
    render(&page.view());
    print_help();

    while let Some(input) = read_line("workspaces> ")? {
        if input.is_empty() {
            continue;
        }
        let (command, args) = match input.split_once(' ') {
            Some((command, args)) => (command, args.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "quit" | "exit" | "q" => {
                println!("👋 Goodbye!");
                break;
            }
            "help" | "h" => {
                print_help();
                continue;
            }
            "list" | "ls" | "retry" => {
                if let Err(e) = page.load().await {
                    tracing::warn!(error = %e, "reload failed");
                }
            }
            "page" => match args.parse::<usize>() {
                Ok(n) => {
                    page.go_to_page(n);
                }
                Err(_) => println!("❌ Usage: page <n>"),
            },
            "next" => {
                page.next_page();
            }
            "prev" => {
                page.previous_page();
            }
            "size" => match args.parse::<usize>().map(ItemsPerPage::try_from) {
                Ok(Ok(size)) => page.set_items_per_page(size),
                _ => println!("❌ Usage: size <6|12|24|48>"),
            },
            "new" => page.open_create_modal(),
            "edit" => {
                let selected = page.workspaces().iter().find(|w| w.id == args).cloned();
                match selected {
                    Some(workspace) => page.open_edit_modal(&workspace),
                    None => println!("❌ Unknown workspace: {}", args),
                }
            }
            "name" => page.set_name(args),
            "desc" => page.set_description(args),
            "cancel" => page.close_modal(),
            "submit" => match page.submit().await {
                SubmitOutcome::Ignored => println!("❌ Nothing to submit"),
                SubmitOutcome::Invalid => println!("❌ Please fix the highlighted fields"),
                _ => {}
            },
            "delete" => {
                if args.is_empty() {
                    println!("❌ Usage: delete <id>");
                    continue;
                }
                if page.delete(args).await == DeleteOutcome::Cancelled {
                    println!("Delete cancelled");
                }
            }
            _ => {
                println!("❌ Unknown command: {} (type 'help')", command);
                continue;
            }
        }
        render(&page.view());
    }
    Ok(())
}
