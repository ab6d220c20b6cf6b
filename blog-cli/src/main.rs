use anyhow::{Context, Result};
use blog_client::{BlogClient, NewPost, Post, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the blog API
    #[arg(short, long, env = "BLOG_SERVER", default_value = DEFAULT_BASE_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every post
    List,

    /// Publish a new post
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(short, long)]
        author: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = BlogClient::new(cli.server);

    println!("🔌 Connecting to: {}", client.base_url());

    match cli.command {
        Commands::List => {
            let posts = client
                .list_posts()
                .await
                .context("Failed to list posts")?;

            println!("✅ Found {} posts", posts.len());
            println!();

            if posts.is_empty() {
                println!("   No posts found");
                println!("   Tip: blog-cli create --title \"My Post\" --content \"Hello\"");
            } else {
                for (i, post) in posts.iter().enumerate() {
                    println!("   {}. [{}] {}", i + 1, post.id, post.title);
                    print_details(post);
                    println!();
                }
            }
        }

        Commands::Create {
            title,
            content,
            author,
        } => {
            println!("📝 Creating new post...");

            let post = client
                .create_post(&NewPost {
                    title,
                    content,
                    author,
                })
                .await
                .context("Failed to create post")?;

            println!("✅ Post created successfully!");
            println!("   ID: {}", post.id);
            println!("   Title: {}", post.title);
            print_details(&post);
        }
    }

    Ok(())
}

fn print_details(post: &Post) {
    println!("      Author: {}", post.author.as_deref().unwrap_or("anonymous"));
    println!("      Created: {}", post.created_at);
    println!("      Content: {}", truncate(&post.content, 50));
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
