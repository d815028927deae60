use super::args::Commands;
use crate::application::{ClientError, ClientResult, services::ArticleServices};
use crate::domain::article::{
    Article, ArticleUpdate, LogWindow, PageId, PathParams, RevNumber,
};
use serde::Serialize;
use serde_json::{Value, json};

/// Execute one command and return what should be printed.
pub async fn run(services: &ArticleServices, command: Commands) -> ClientResult<Value> {
    match command {
        Commands::Create {
            page_id,
            title,
            source,
            tags,
            parent,
            locked,
        } => {
            let mut article = Article::new(PageId::new(page_id)?).with_tags(tags);
            article.title = title;
            article.source = source;
            article.parent = parent.map(PageId::new).transpose()?;
            if locked {
                article = article.with_locked(true);
            }
            services.articles.create(&article).await?;
            Ok(json!({"created": article.page_id}))
        }
        Commands::Get { page_id } => {
            let article = services.articles.fetch(&PageId::new(page_id)?).await?;
            to_output(&article)
        }
        Commands::Update {
            page_id,
            title,
            source,
            tags,
            parent,
            locked,
            rename_to,
        } => {
            let mut update = ArticleUpdate {
                title,
                source,
                tags,
                parent: parent.map(PageId::new).transpose()?,
                locked,
                ..ArticleUpdate::default()
            };
            if let Some(new_id) = rename_to {
                update = update.rename_to(PageId::new(new_id)?);
            }
            if update.is_empty() {
                return Err(ClientError::validation("update needs at least one field"));
            }
            let article = services
                .articles
                .update(&PageId::new(page_id)?, &update)
                .await?;
            to_output(&article)
        }
        Commands::Delete { page_id } => {
            let id = PageId::new(page_id)?;
            services.articles.delete(&id).await?;
            Ok(json!({"deleted": id}))
        }
        Commands::Log {
            page_id,
            from,
            to,
            all,
        } => {
            let id = PageId::new(page_id)?;
            let log = if all {
                services.revisions.fetch_full_log(&id).await?
            } else {
                let window = match to {
                    Some(to) => LogWindow::new(from, to)?,
                    None => LogWindow::starting_at(from),
                };
                services.revisions.fetch_log(&id, window).await?
            };
            to_output(&log)
        }
        Commands::Revert {
            page_id,
            rev_number,
        } => {
            let article = services
                .revisions
                .revert(&PageId::new(page_id)?, RevNumber::new(rev_number))
                .await?;
            to_output(&article)
        }
        Commands::Version {
            page_id,
            rev_number,
            params,
        } => {
            let path_params: Option<PathParams> =
                (!params.is_empty()).then(|| params.into_iter().collect());
            let snapshot = services
                .versions
                .fetch_version(
                    &PageId::new(page_id)?,
                    RevNumber::new(rev_number),
                    path_params.as_ref(),
                )
                .await?;
            to_output(&snapshot)
        }
        Commands::Links { page_id } => {
            let backlinks = services
                .backlinks
                .fetch_backlinks(&PageId::new(page_id)?)
                .await?;
            to_output(&backlinks)
        }
        Commands::Votes { page_id, delete } => {
            let id = PageId::new(page_id)?;
            let votes = if delete {
                services.votes.delete_votes(&id).await?
            } else {
                services.votes.fetch_votes(&id).await?
            };
            Ok(votes.into_inner())
        }
    }
}

fn to_output<T: Serialize>(value: &T) -> ClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}
