use std::env;

use kbase_core::category::Category;
use kbase_core::config::Config;
use kbase_resolver::ContentResolver;
use tracing_subscriber::EnvFilter;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <categories|list|show|refresh> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn category_arg(args: &[String]) -> Category {
    let slug = args.first().cloned().unwrap_or_else(|| {
        eprintln!("Missing category (one of: dsa, system-design, behavioral, ood, design-pattern)");
        std::process::exit(1)
    });
    Category::from_slug(&slug).unwrap_or_else(|| {
        eprintln!("Unknown category: {}", slug);
        std::process::exit(1)
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "categories" => {
            for category in Category::ALL {
                let cfg = category.config();
                println!(
                    "{:<16} ext={:<4} difficulty={} solutions={} index={}",
                    cfg.slug, cfg.content_ext, cfg.difficulty_enabled, cfg.has_solutions, cfg.has_prebuilt_index
                );
            }
        }
        "list" => {
            let category = category_arg(&args);
            let resolver = ContentResolver::new(config.content_root(), config.generated_dir())?;
            let summaries =
                tokio::runtime::Runtime::new()?.block_on(resolver.list_topics(category));
            for s in &summaries {
                println!("{:<40} {:<8} {}", s.id, format!("{:?}", s.difficulty).to_lowercase(), s.title);
            }
            println!("{} topics in {}", summaries.len(), category);
        }
        "show" => {
            let category = category_arg(&args);
            let topic_id = args.get(1).cloned().unwrap_or_else(|| {
                eprintln!("Usage: kbase show <category> <topic-id>");
                std::process::exit(1)
            });
            let resolver = ContentResolver::new(config.content_root(), config.generated_dir())?;
            let topic =
                tokio::runtime::Runtime::new()?.block_on(resolver.get_topic(category, &topic_id));
            match topic {
                Some(topic) => {
                    println!("{} [{:?}]", topic.summary.title, topic.summary.difficulty);
                    if let Some(tags) = &topic.summary.tags {
                        println!("tags: {}", tags.join(", "));
                    }
                    println!("\n{}\n", topic.description);
                    if !topic.solutions.is_empty() {
                        let langs: Vec<&str> =
                            topic.solutions.keys().map(String::as_str).collect();
                        println!("solutions: {}", langs.join(", "));
                    }
                }
                None => {
                    eprintln!("{}/{} not found", category, topic_id);
                    std::process::exit(1);
                }
            }
        }
        "refresh" => {
            let category = category_arg(&args);
            let resolver = ContentResolver::new(config.content_root(), config.generated_dir())?;
            let runtime = tokio::runtime::Runtime::new()?;
            let before = runtime.block_on(resolver.list_topics(category)).len();
            resolver.invalidate(Some(category));
            let after = runtime.block_on(resolver.list_topics(category)).len();
            println!("{}: {} topics cached, {} after refresh", category, before, after);
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
