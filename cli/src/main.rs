mod transport;


use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use esg_api::{
    ApiClient, ApiError, LeaderboardParams, LeaderboardPeriod, MemoryTokenStore, NoopNavigator,
    PointHistoryParams, TaskCategory, TaskCompletionRequest, TaskFilterParams, TaskStatus,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing access token; run `login` and pass --token or set VERDANCE_TOKEN")]
    MissingToken,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "verdance-cli", about = "Verdance ESG platform CLI")]
struct Cli {
    #[arg(long, env = "VERDANCE_API_URL", default_value = esg_api::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "VERDANCE_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for an access token and print it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the authenticated user.
    Me,
    Tasks(TasksCommand),
    Points(PointsCommand),
    Profile(ProfileCommand),
}

#[derive(Args, Debug)]
struct TasksCommand {
    #[command(subcommand)]
    command: TasksSubcommand,
}

#[derive(Subcommand, Debug)]
enum TasksSubcommand {
    List(TaskListArgs),
    Show {
        task_id: String,
    },
    Participate {
        task_id: String,
    },
    Complete {
        task_id: String,
        #[arg(long)]
        evidence: Option<String>,
        #[arg(long)]
        feedback: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
struct TaskListArgs {
    #[arg(long, value_parser = parse_wire::<TaskStatus>)]
    status: Option<TaskStatus>,
    #[arg(long)]
    category: Option<TaskCategory>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    limit: Option<u32>,
}

impl TaskListArgs {
    fn into_params(self) -> TaskFilterParams {
        TaskFilterParams {
            status: self.status,
            category: self.category,
            search: self.search,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Args, Debug)]
struct PointsCommand {
    #[command(subcommand)]
    command: PointsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PointsSubcommand {
    History {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Summary,
    Leaderboard {
        #[arg(long)]
        period: Option<LeaderboardPeriod>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    /// Show your profile, or another user's by id.
    Show {
        user_id: Option<String>,
    },
    Password {
        #[arg(long = "old")]
        old_password: String,
        #[arg(long = "new")]
        new_password: String,
    },
}

/// Parse a CLI value using the API's wire spelling (`published`, `social`, ...).
fn parse_wire<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_ascii_lowercase()))
        .map_err(|_| format!("unrecognized value: {raw}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let tokens = Arc::new(match cli.token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let client = ApiClient::new(
        &cli.base_url,
        Arc::new(ReqwestTransport::new()?),
        tokens,
        Arc::new(NoopNavigator),
    );
    tracing::debug!(base_url = client.base_url(), "api client ready");

    match cli.command {
        Command::Login { email, password } => run_login(&client, &email, &password).await,
        Command::Me => {
            require_token(&client)?;
            print_json(&client.auth().current_user().await?)
        }
        Command::Tasks(tasks) => run_tasks(&client, tasks).await,
        Command::Points(points) => run_points(&client, points).await,
        Command::Profile(profile) => run_profile(&client, profile).await,
    }
}

fn require_token(client: &ApiClient) -> Result<(), CliError> {
    client.token().map(|_| ()).ok_or(CliError::MissingToken)
}

async fn run_login(client: &ApiClient, email: &str, password: &str) -> Result<(), CliError> {
    let response = client.auth().login(email, password).await?;
    if let Some(user) = &response.user {
        tracing::info!(user = %user.username, "logged in");
    }
    println!("{}", response.access_token);
    Ok(())
}

async fn run_tasks(client: &ApiClient, tasks: TasksCommand) -> Result<(), CliError> {
    require_token(client)?;
    let service = client.tasks();
    match tasks.command {
        TasksSubcommand::List(args) => print_json(&service.list(&args.into_params()).await?),
        TasksSubcommand::Show { task_id } => print_json(&service.get(&task_id).await?),
        TasksSubcommand::Participate { task_id } => print_json(&service.participate(&task_id).await?),
        TasksSubcommand::Complete { task_id, evidence, feedback } => {
            let body = (evidence.is_some() || feedback.is_some())
                .then_some(TaskCompletionRequest { evidence, feedback });
            print_json(&service.complete(&task_id, body.as_ref()).await?)
        }
    }
}

async fn run_points(client: &ApiClient, points: PointsCommand) -> Result<(), CliError> {
    require_token(client)?;
    let service = client.points();
    match points.command {
        PointsSubcommand::History { start_date, end_date, page, limit } => {
            let params = PointHistoryParams { start_date, end_date, source_type: None, page, limit };
            print_json(&service.history(&params).await?)
        }
        PointsSubcommand::Summary => print_json(&service.summary().await?),
        PointsSubcommand::Leaderboard { period, department, limit } => {
            let params = LeaderboardParams { period, department, limit: Some(limit), page: None };
            print_json(&service.leaderboard(&params).await?)
        }
    }
}

async fn run_profile(client: &ApiClient, profile: ProfileCommand) -> Result<(), CliError> {
    require_token(client)?;
    let service = client.users();
    match profile.command {
        ProfileSubcommand::Show { user_id } => print_json(&service.profile(user_id.as_deref()).await?),
        ProfileSubcommand::Password { old_password, new_password } => {
            service.change_password(&old_password, &new_password).await?;
            println!("password changed");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
