//! Engager CLI - command-line interface for the TradeUp X engager daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9639";

#[derive(Parser)]
#[command(name = "engager")]
#[command(about = "TradeUp X engager CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "ENGAGER_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new job
    Create {
        /// Job type: "posting" or "reply-monitoring"
        #[arg(short, long)]
        job_type: String,

        /// Job settings as a JSON object
        #[arg(long)]
        settings: Option<String>,
    },

    /// Start a job's execution loop
    Start {
        /// Job ID
        job_id: String,
    },

    /// Stop a job
    Stop {
        /// Job ID
        job_id: String,
    },

    /// Pause a job
    Pause {
        /// Job ID
        job_id: String,
    },

    /// Show one job
    Get {
        /// Job ID
        job_id: String,
    },

    /// List all jobs
    Jobs,

    /// Show bot status
    Status,

    /// Show aggregated metrics
    Metrics,

    /// Show post history
    Posts {
        /// Page size
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Page offset
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Show or update bot settings
    Settings {
        /// New settings as a JSON object; omit to show current settings
        #[arg(long)]
        set: Option<String>,
    },

    /// Generate post candidates without publishing
    Generate {
        /// Number of candidates
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Pin all candidates to one topic
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Publish one post immediately
    Publish {
        /// Post text
        content: String,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Tabled)]
struct JobRow {
    id: String,
    #[tabled(rename = "type")]
    kind: String,
    status: String,
    posts_today: i64,
    replies_today: i64,
    success_rate: i64,
}

impl JobRow {
    fn from_json(job: &serde_json::Value) -> Self {
        let stats = &job["stats"];
        Self {
            id: job["id"].as_str().unwrap_or("?").to_string(),
            kind: job["type"].as_str().unwrap_or("?").to_string(),
            status: job["status"].as_str().unwrap_or("?").to_string(),
            posts_today: stats["postsToday"].as_i64().unwrap_or(0),
            replies_today: stats["repliesToday"].as_i64().unwrap_or(0),
            success_rate: stats["successRate"].as_i64().unwrap_or(0),
        }
    }
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn print_job(job: &serde_json::Value) {
    let table = Table::new(vec![JobRow::from_json(job)]).to_string();
    println!("{}", table);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create { job_type, settings } => {
            let settings_json: serde_json::Value = match settings {
                Some(raw) => serde_json::from_str(&raw).context("Invalid JSON settings")?,
                None => json!({}),
            };

            let params = json!({
                "jobType": job_type,
                "settings": settings_json,
            });

            let job = call_rpc(&cli.rpc_url, "job.create.v1", params).await?;

            println!("{}", "✓ Job created".green().bold());
            println!();
            print_job(&job);
        }

        Commands::Start { job_id } => {
            let job = call_rpc(&cli.rpc_url, "job.start.v1", json!({ "jobId": job_id })).await?;
            println!("{}", format!("✓ Job {} started", job_id).green().bold());
            print_job(&job);
        }

        Commands::Stop { job_id } => {
            call_rpc(&cli.rpc_url, "job.stop.v1", json!({ "jobId": job_id })).await?;
            println!("{}", format!("✓ Job {} stopped", job_id).green().bold());
        }

        Commands::Pause { job_id } => {
            call_rpc(&cli.rpc_url, "job.pause.v1", json!({ "jobId": job_id })).await?;
            println!("{}", format!("✓ Job {} paused", job_id).yellow().bold());
        }

        Commands::Get { job_id } => {
            let job = call_rpc(&cli.rpc_url, "job.get.v1", json!({ "jobId": job_id })).await?;
            print_job(&job);
        }

        Commands::Jobs => {
            let result = call_rpc(&cli.rpc_url, "job.list.v1", json!({})).await?;
            let jobs = result["jobs"].as_array().cloned().unwrap_or_default();

            if jobs.is_empty() {
                println!("{}", "No jobs".yellow());
            } else {
                let rows: Vec<JobRow> = jobs.iter().map(JobRow::from_json).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Status => {
            println!("{}", "Bot Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "bot.status.v1", json!({})).await {
                Ok(status) => {
                    let running = status["running"].as_bool().unwrap_or(false);
                    let label = if running {
                        "RUNNING".green()
                    } else {
                        "IDLE".yellow()
                    };
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), label);
                    println!(
                        "  {} {}",
                        "Active Jobs:".bold(),
                        status["activeJobs"]
                    );
                    println!();
                    let stats = &status["stats"];
                    println!("  {} {}", "Posts Today:".bold(), stats["postsToday"]);
                    println!("  {} {}", "Replies Today:".bold(), stats["repliesToday"]);
                    println!("  {} {}%", "Success Rate:".bold(), stats["successRate"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "OFFLINE".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }

        Commands::Metrics => {
            let metrics = call_rpc(&cli.rpc_url, "bot.metrics.v1", json!({})).await?;

            println!("{}", "Bot Metrics".cyan().bold());
            println!();
            println!("  {} {}", "Total Posts:".bold(), metrics["totalPosts"]);
            println!("  {} {}", "Total Likes:".bold(), metrics["totalLikes"]);
            println!(
                "  {} {:.2}",
                "Avg Engagement:".bold(),
                metrics["avgEngagement"].as_f64().unwrap_or(0.0)
            );
            println!("  {} {}", "Followers:".bold(), metrics["followers"]);
        }

        Commands::Posts { limit, offset } => {
            let params = json!({ "limit": limit, "offset": offset });
            let result = call_rpc(&cli.rpc_url, "bot.posts.v1", params).await?;

            let posts = result["posts"].as_array().cloned().unwrap_or_default();
            if posts.is_empty() {
                println!("{}", "No posts recorded".yellow());
            } else {
                for post in &posts {
                    let engagement = &post["engagement"];
                    println!(
                        "{} {}",
                        post["id"].as_str().unwrap_or("?").bold(),
                        format!(
                            "({} likes, {} retweets, {} replies)",
                            engagement["likes"], engagement["retweets"], engagement["replies"]
                        )
                        .dimmed()
                    );
                    println!("  {}", post["content"].as_str().unwrap_or(""));
                    println!();
                }
                println!(
                    "{} of {} posts{}",
                    posts.len(),
                    result["total"],
                    if result["hasMore"].as_bool().unwrap_or(false) {
                        " (more available)"
                    } else {
                        ""
                    }
                );
            }
        }

        Commands::Settings { set } => match set {
            Some(raw) => {
                let settings: serde_json::Value =
                    serde_json::from_str(&raw).context("Invalid JSON settings")?;
                let updated = call_rpc(
                    &cli.rpc_url,
                    "settings.update.v1",
                    json!({ "settings": settings }),
                )
                .await?;
                println!("{}", "✓ Settings updated".green().bold());
                println!("{}", serde_json::to_string_pretty(&updated)?);
            }
            None => {
                let settings = call_rpc(&cli.rpc_url, "settings.get.v1", json!({})).await?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        },

        Commands::Generate { count, topic } => {
            let params = json!({ "count": count, "topic": topic });
            let result = call_rpc(&cli.rpc_url, "content.generate.v1", params).await?;

            let posts = result["posts"].as_array().cloned().unwrap_or_default();
            for (i, post) in posts.iter().enumerate() {
                println!(
                    "{} {}",
                    format!("[{}]", i + 1).bold(),
                    format!(
                        "topic: {}, score: {:.1}",
                        post["topic"].as_str().unwrap_or("?"),
                        post["engagementScore"].as_f64().unwrap_or(0.0)
                    )
                    .dimmed()
                );
                println!("  {}", post["content"].as_str().unwrap_or(""));
                println!();
            }
        }

        Commands::Publish { content } => {
            let result =
                call_rpc(&cli.rpc_url, "content.publish.v1", json!({ "content": content })).await?;

            if result["success"].as_bool().unwrap_or(false) {
                println!("{}", "✓ Post published".green().bold());
                if let Some(url) = result["url"].as_str() {
                    println!("  {}", url);
                }
            } else {
                println!("{}", "✗ Publish failed".red().bold());
                if let Some(error) = result["error"].as_str() {
                    println!("  {}", error);
                }
            }
        }
    }

    Ok(())
}
