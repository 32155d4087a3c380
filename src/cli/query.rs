//! Query command: topic metadata as JSON.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fs;

use crate::cli::QueryArgs;
use crate::content::Topic;
use crate::core::RouteKey;
use crate::registry::Registry;
use crate::utils::slug::slugify;

/// One topic's metadata in query output.
#[derive(Debug, Serialize)]
struct TopicMeta<'a> {
    route: &'a RouteKey,
    title: &'a str,
    lead: &'a str,
    sections: Vec<SectionMeta<'a>>,
}

/// One section's heading and anchor.
#[derive(Debug, Serialize)]
struct SectionMeta<'a> {
    heading: &'a str,
    anchor: String,
}

impl<'a> TopicMeta<'a> {
    fn from_topic(topic: &'a Topic) -> Self {
        Self {
            route: &topic.route,
            title: &topic.title,
            lead: &topic.lead,
            sections: topic
                .sections
                .iter()
                .map(|s| SectionMeta {
                    heading: &s.heading,
                    anchor: slugify(&s.heading),
                })
                .collect(),
        }
    }
}

/// Run the query command: select topics, serialize, print or write.
pub fn run_query(args: &QueryArgs, registry: &Registry) -> Result<()> {
    let topics = select_topics(args, registry)?;
    let metas: Vec<TopicMeta<'_>> = topics.iter().map(|t| TopicMeta::from_topic(t)).collect();

    let json = if args.pretty {
        serde_json::to_string_pretty(&metas)?
    } else {
        serde_json::to_string(&metas)?
    };

    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write query output to {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}

/// Topics to report: all registered ones, or the requested routes.
///
/// Unlike page resolution, an unknown route here is an error: the caller
/// named something that does not exist, and silently reporting the
/// not-found page would hide the typo.
fn select_topics<'a>(args: &QueryArgs, registry: &'a Registry) -> Result<Vec<&'a Topic>> {
    if args.routes.is_empty() {
        return Ok(registry.topics().collect());
    }

    let mut topics = Vec::with_capacity(args.routes.len());
    for route in &args.routes {
        let key = RouteKey::from_path(route);
        match registry.get(&key) {
            Some(topic) => topics.push(topic),
            None => bail!("no topic registered at `{}`", key),
        }
    }
    Ok(topics)
}
