//! Posts command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use weft_blog::{Entry, Post};
use weft_core::ListOptions;
use weft_core::iter::{DEFAULT_INCLUDE, DEFAULT_LIMIT};
use weft_http::ContentClient;

use crate::output;

#[derive(Args, Debug)]
pub struct PostsArgs {
    /// Posts per page
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Link depth to include
    #[arg(long, default_value_t = DEFAULT_INCLUDE)]
    pub include: u32,

    /// Page to start from
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Stop after this many posts
    #[arg(long)]
    pub max: Option<usize>,
}

pub async fn run(args: PostsArgs, client: &ContentClient) -> Result<()> {
    let options = ListOptions {
        page: args.page,
        limit: args.limit,
        include: args.include,
    };
    let mut posts = client.list::<Post>(options);

    let mut count = 0;
    while args.max.is_none_or(|max| count < max) {
        let Some(post) = posts.next().await.context("Failed to fetch posts")? else {
            break;
        };
        print_post(&post);
        count += 1;
    }

    if count == 0 {
        output::note("No posts found.");
    }

    Ok(())
}

fn print_post(post: &Post) {
    let date = post.date.map(|d| d.to_string()).unwrap_or_default();
    println!("{} {}", post.title.bold(), date.dimmed());

    let authors: Vec<&str> = post.author.iter().map(|a| a.name.as_str()).collect();
    if !authors.is_empty() {
        output::field("  authors", &authors.join(", "));
    }

    let categories: Vec<String> = post.category.iter().map(|c| c.path().join(" < ")).collect();
    if !categories.is_empty() {
        output::field("  categories", &categories.join(", "));
    }

    match &post.byline {
        Some(Entry::Author(author)) => output::field("  byline", &author.name),
        Some(Entry::Post(other)) => output::field("  byline", &format!("see \"{}\"", other.title)),
        Some(other) => output::field("  byline", other.id().as_str()),
        None => {}
    }
}
