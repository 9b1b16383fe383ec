mod commands;

use backpack_client::{ApiClient, ClientConfig};
use clap::Parser;

use commands::CommandError;

mod cli {
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(name = "backpack", version, about = "Command-line client for a Backpack instance")]
    pub struct Args {
        /// API base URL, e.g. https://backpack.example.com/api
        #[arg(long, env = "BACKPACK_API_URL")]
        pub api_url: Option<String>,

        /// Application token sent as a bearer token
        #[arg(long, env = "BACKPACK_TOKEN", hide_env_values = true)]
        pub token: Option<String>,

        /// Log in with this email or username before running the command
        #[arg(long, requires = "password")]
        pub login: Option<String>,

        /// Password for --login
        #[arg(long, env = "BACKPACK_PASSWORD", hide_env_values = true)]
        pub password: Option<String>,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Subcommand, Debug)]
    pub enum Command {
        /// Show server information
        Info,
        /// Show the current user
        Whoami,
        /// Create a new account
        Register {
            #[arg(long)]
            username: String,
            #[arg(long)]
            email: String,
            #[arg(long)]
            password: String,
            /// Required on invite-only instances
            #[arg(long)]
            registration_key: Option<String>,
        },
        /// Update account settings
        Settings {
            #[arg(long)]
            email: Option<String>,
            #[arg(long)]
            username: Option<String>,
            #[arg(long)]
            new_password: Option<String>,
            #[arg(long)]
            current_password: String,
        },
        /// Verify the account email
        Verify { code: String },
        /// Resend the verification email
        ResendCode,
        /// Print storage usage in bytes
        Usage,
        /// Upload a file
        Upload {
            path: PathBuf,
            /// Override the content type guessed from the extension
            #[arg(long)]
            content_type: Option<String>,
        },
        /// Search uploaded files
        Search {
            #[arg(long, default_value_t = 1)]
            page: u64,
            query: Option<String>,
        },
        /// Show a file
        File { id: String },
        /// Delete a file
        Delete { id: String },
        /// End the session
        Logout,
        /// Manage applications
        #[command(subcommand)]
        Apps(AppsCommand),
    }

    #[derive(Subcommand, Debug)]
    pub enum AppsCommand {
        List,
        Get { id: String },
        Create { name: String },
        Delete { id: String },
        /// Print the application's bearer token
        Token { id: String },
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    env_logger::init();

    let args = cli::Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> Result<(), CommandError> {
    // --api-url / BACKPACK_API_URL, then API_URL
    let config = match args.api_url.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    log::debug!("Using API at {}", config.base_url());

    let client = ApiClient::new(&config)?;

    if let Some(token) = args.token {
        client.set_access_token(token).await;
    }

    if let (Some(auth), Some(password)) = (args.login.as_deref(), args.password.as_deref()) {
        commands::login(&client, auth, password).await?;
    }

    commands::run(&client, args.command).await
}
