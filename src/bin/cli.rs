use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use quillpost::cli::{check_policy, describe_policy};
use quillpost_config::AuthzConfig;
use quillpost_models::UserId;
use quillpost_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "quillpost-cli")]
#[command(about = "Quillpost CLI - Authorization tools for Quillpost", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the requirement a policy name resolves to
    ParsePolicy {
        /// Policy name, e.g. permission.Read.Post.All
        name: String,
    },
    /// Decide a policy for a user against the database
    Check {
        /// User id to authorize
        #[arg(short = 'u', long)]
        user_id: i64,

        /// Policy name to check
        #[arg(short = 'p', long)]
        policy: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::ParsePolicy { name } => handle_parse_policy(&name),
        Commands::Check { user_id, policy } => handle_check(UserId::new(user_id), &policy).await,
    }
}

fn handle_parse_policy(name: &str) {
    match describe_policy(name) {
        Ok(description) => println!("{}", description),
        Err(e) => {
            eprintln!("\n❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_check(user_id: UserId, policy: &str) {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("\n❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    let pool = match quillpost_db::init_db_pool(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("\n❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let decision = check_policy(pool, &AuthzConfig::from_env(), user_id, policy).await;
    if decision.is_allowed() {
        println!("✅ User {} is allowed: {}", user_id, policy);
    } else {
        println!("⛔ User {} is denied: {} ({})", user_id, policy, decision);
        std::process::exit(2);
    }
}
