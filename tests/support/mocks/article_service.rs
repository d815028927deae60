// tests/support/mocks/article_service.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use wiki_articles::application::ports::{ApiRequest, Method, Transport};
use wiki_articles::domain::article::{Article, ArticleUpdate, PageId, RevisionType};
use wiki_articles::domain::user::{UserData, UserType};
use wiki_articles::{ClientError, ClientResult};

use super::time::revision_time;

#[derive(Clone)]
struct StoredRevision {
    rev_number: u64,
    kind: RevisionType,
    comment: String,
    meta: Map<String, Value>,
    content: Article,
}

struct StoredArticle {
    current: Article,
    history: Vec<StoredRevision>,
    votes: Value,
}

impl StoredArticle {
    fn append(&mut self, kind: RevisionType, comment: &str, meta: Map<String, Value>) -> u64 {
        let rev_number = self.history.last().map_or(1, |rev| rev.rev_number + 1);
        self.history.push(StoredRevision {
            rev_number,
            kind,
            comment: comment.to_owned(),
            meta,
            content: self.current.clone(),
        });
        rev_number
    }
}

#[derive(Default)]
struct State {
    articles: HashMap<String, StoredArticle>,
    requests: Vec<ApiRequest>,
}

/// Behaves like the article service: history is append-only, revision
/// numbers start at 1, log windows are ascending, tags are normalized.
pub struct InMemoryArticleService {
    state: Mutex<State>,
    editor: UserData,
}

impl Default for InMemoryArticleService {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_votes() -> Value {
    json!({"rating": 0, "votes": []})
}

fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = tags.iter().map(|t| t.trim().to_lowercase()).collect();
    tags.sort();
    tags.dedup();
    tags.retain(|t| !t.is_empty());
    tags
}

fn not_found(what: impl Into<String>) -> ClientError {
    ClientError::not_found(what)
}

fn require_body<T: serde::de::DeserializeOwned>(request: &ApiRequest) -> ClientResult<T> {
    let body = request
        .body
        .clone()
        .ok_or_else(|| ClientError::validation("missing request body"))?;
    serde_json::from_value(body).map_err(|err| ClientError::validation(err.to_string()))
}

fn query_u64(request: &ApiRequest, key: &str, default: u64) -> ClientResult<u64> {
    match request.query_value(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ClientError::validation(format!("{key} must be an integer"))),
        None => Ok(default),
    }
}

/// Targets of `open ... close` markers, e.g. `[[[target|label]]]`.
fn extract_targets(source: &str, open: &str, close: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = source;
    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        let Some(end) = after.find(close) else {
            break;
        };
        let target = after[..end].split('|').next().unwrap_or("").trim();
        if !target.is_empty() && !found.iter().any(|t: &String| t == target) {
            found.push(target.to_owned());
        }
        rest = &after[end + close.len()..];
    }
    found
}

fn render(source: &str, path_params: &Map<String, Value>) -> String {
    let lang = path_params
        .get("lang")
        .and_then(Value::as_str)
        .unwrap_or("default");
    format!("<div lang=\"{lang}\">{source}</div>")
}

impl InMemoryArticleService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            editor: UserData {
                kind: UserType::Normal,
                username: "editor".into(),
                avatar: None,
                admin: false,
                staff: false,
                id: Some(1),
            },
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn set_votes(&self, id: &str, votes: Value) {
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.articles.get_mut(id) {
            stored.votes = votes;
        }
    }

    pub fn revision_count(&self, id: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .articles
            .get(id)
            .map_or(0, |stored| stored.history.len())
    }

    fn handle(&self, state: &mut State, request: &ApiRequest) -> ClientResult<Option<Value>> {
        let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();
        match (request.method, segments.as_slice()) {
            (Method::Post, ["api", "articles", "new"]) => Self::create(state, request),
            (Method::Get, ["api", "articles", id]) => Self::fetch(state, id),
            (Method::Put, ["api", "articles", id]) => Self::update(state, id, request),
            (Method::Delete, ["api", "articles", id]) => Self::delete(state, id),
            (Method::Get, ["api", "articles", id, "log"]) => self.log(state, id, request),
            (Method::Put, ["api", "articles", id, "log"]) => Self::revert(state, id, request),
            (Method::Get, ["api", "articles", id, "version"]) => {
                Self::version(state, id, request)
            }
            (Method::Get, ["api", "articles", id, "links"]) => Self::links(state, id),
            (Method::Get, ["api", "articles", id, "votes"]) => Self::votes(state, id, false),
            (Method::Delete, ["api", "articles", id, "votes"]) => Self::votes(state, id, true),
            (Method::Post, ["api", "modules"]) => Self::module(request),
            _ => Err(ClientError::from_status(
                405,
                format!("no route for {} {}", request.method, request.path),
            )),
        }
    }

    fn create(state: &mut State, request: &ApiRequest) -> ClientResult<Option<Value>> {
        let mut article: Article = require_body(request)?;
        let key = article.page_id.as_str().to_owned();
        if state.articles.contains_key(&key) {
            return Err(ClientError::validation(format!(
                "article `{key}` already exists"
            )));
        }
        article.tags = normalize_tags(&article.tags);
        let mut stored = StoredArticle {
            current: article,
            history: Vec::new(),
            votes: empty_votes(),
        };
        stored.append(RevisionType::New, "", Map::new());
        state.articles.insert(key, stored);
        Ok(None)
    }

    fn fetch(state: &State, id: &str) -> ClientResult<Option<Value>> {
        let stored = state
            .articles
            .get(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;
        Ok(Some(serde_json::to_value(&stored.current)?))
    }

    fn update(state: &mut State, id: &str, request: &ApiRequest) -> ClientResult<Option<Value>> {
        let update: ArticleUpdate = require_body(request)?;
        if !state.articles.contains_key(id) {
            return Err(not_found(format!("article `{id}`")));
        }

        let renamed_to: Option<PageId> = match update.page_id.as_ref() {
            Some(new_id) if new_id.as_str() != id => {
                if !update.force_page_id.unwrap_or(false) {
                    return Err(ClientError::validation(
                        "changing pageId requires forcePageId",
                    ));
                }
                if state.articles.contains_key(new_id.as_str()) {
                    return Err(ClientError::validation(format!(
                        "article `{new_id}` already exists"
                    )));
                }
                Some(new_id.clone())
            }
            _ => None,
        };

        let stored = state
            .articles
            .get_mut(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;
        let mut next = stored.current.clone();
        let mut changed = Vec::new();

        if let Some(source) = update.source {
            if next.source.as_deref() != Some(source.as_str()) {
                changed.push(RevisionType::Source);
            }
            next.source = Some(source);
        }
        if let Some(title) = update.title {
            if next.title.as_deref() != Some(title.as_str()) {
                changed.push(RevisionType::Title);
            }
            next.title = Some(title);
        }
        if let Some(tags) = update.tags {
            let tags = normalize_tags(&tags);
            if tags != next.tags {
                changed.push(RevisionType::Tags);
            }
            next.tags = tags;
        }
        if let Some(parent) = update.parent {
            if next.parent.as_ref() != Some(&parent) {
                changed.push(RevisionType::Parent);
            }
            next.parent = Some(parent);
        }
        if let Some(locked) = update.locked {
            next.locked = Some(locked);
        }
        if let Some(new_id) = &renamed_to {
            next.page_id = new_id.clone();
            changed.push(RevisionType::Name);
        }

        let kind = changed.first().cloned().unwrap_or(RevisionType::Source);
        let mut meta = Map::new();
        meta.insert(
            "changed".into(),
            Value::Array(changed.iter().map(|c| Value::from(c.as_str())).collect()),
        );
        stored.current = next.clone();
        stored.append(kind, "", meta);

        if let Some(new_id) = renamed_to {
            if let Some(moved) = state.articles.remove(id) {
                state.articles.insert(new_id.into_inner(), moved);
            }
        }
        Ok(Some(serde_json::to_value(&next)?))
    }

    fn delete(state: &mut State, id: &str) -> ClientResult<Option<Value>> {
        state
            .articles
            .remove(id)
            .map(|_| None)
            .ok_or_else(|| not_found(format!("article `{id}`")))
    }

    fn log(&self, state: &State, id: &str, request: &ApiRequest) -> ClientResult<Option<Value>> {
        let stored = state
            .articles
            .get(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;
        let from = query_u64(request, "from", 0)?;
        let to = query_u64(request, "to", from + 25)?;

        let len = stored.history.len();
        let start = usize::try_from(from).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(to).unwrap_or(usize::MAX).min(len).max(start);

        let entries: Vec<Value> = stored.history[start..end]
            .iter()
            .map(|rev| {
                json!({
                    "revNumber": rev.rev_number,
                    "user": self.editor,
                    "comment": rev.comment,
                    "createdAt": revision_time(rev.rev_number),
                    "type": rev.kind,
                    "meta": rev.meta,
                })
            })
            .collect();
        Ok(Some(json!({"count": len, "entries": entries})))
    }

    fn revert(state: &mut State, id: &str, request: &ApiRequest) -> ClientResult<Option<Value>> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RevertBody {
            rev_number: u64,
        }

        let body: RevertBody = require_body(request)?;
        let stored = state
            .articles
            .get_mut(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;
        let snapshot = stored
            .history
            .iter()
            .find(|rev| rev.rev_number == body.rev_number)
            .map(|rev| rev.content.clone())
            .ok_or_else(|| not_found(format!("revision {} of `{id}`", body.rev_number)))?;

        let page_id = stored.current.page_id.clone();
        stored.current = Article { page_id, ..snapshot };
        let mut meta = Map::new();
        meta.insert("revNumber".into(), Value::from(body.rev_number));
        stored.append(RevisionType::Revert, "", meta);
        Ok(Some(serde_json::to_value(&stored.current)?))
    }

    fn version(state: &State, id: &str, request: &ApiRequest) -> ClientResult<Option<Value>> {
        let stored = state
            .articles
            .get(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;
        let rev_number = request
            .query_value("revNum")
            .and_then(|raw| raw.parse::<u64>().ok())
            .ok_or_else(|| ClientError::validation("revNum must be an integer"))?;
        let path_params: Map<String, Value> = match request.query_value("pathParams") {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|_| ClientError::validation("pathParams must be a JSON object"))?,
            None => Map::new(),
        };
        let revision = stored
            .history
            .iter()
            .find(|rev| rev.rev_number == rev_number)
            .ok_or_else(|| not_found(format!("revision {rev_number} of `{id}`")))?;
        let source = revision.content.source.clone().unwrap_or_default();
        let rendered = render(&source, &path_params);
        Ok(Some(json!({"source": source, "rendered": rendered})))
    }

    fn links(state: &State, id: &str) -> ClientResult<Option<Value>> {
        let stored = state
            .articles
            .get(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;

        let backlink = |target: &str| match state.articles.get(target) {
            Some(other) => json!({
                "id": target,
                "title": other.current.title.clone().unwrap_or_else(|| target.to_owned()),
                "exists": true,
            }),
            None => json!({"id": target, "title": target, "exists": false}),
        };

        let mut children: Vec<(&String, Value)> = state
            .articles
            .iter()
            .filter(|(_, other)| other.current.parent.as_ref().map(PageId::as_str) == Some(id))
            .map(|(key, _)| (key, backlink(key.as_str())))
            .collect();
        children.sort_by(|a, b| a.0.cmp(b.0));

        let source = stored.current.source.as_deref().unwrap_or("");
        let includes: Vec<Value> = extract_targets(source, "[[include ", "]]")
            .iter()
            .map(|target| backlink(target.as_str()))
            .collect();
        let links: Vec<Value> = extract_targets(source, "[[[", "]]]")
            .iter()
            .map(|target| backlink(target.as_str()))
            .collect();

        Ok(Some(json!({
            "children": children.into_iter().map(|(_, v)| v).collect::<Vec<_>>(),
            "includes": includes,
            "links": links,
        })))
    }

    fn votes(state: &mut State, id: &str, clear: bool) -> ClientResult<Option<Value>> {
        let stored = state
            .articles
            .get_mut(id)
            .ok_or_else(|| not_found(format!("article `{id}`")))?;
        if clear {
            stored.votes = empty_votes();
        }
        Ok(Some(stored.votes.clone()))
    }

    fn module(request: &ApiRequest) -> ClientResult<Option<Value>> {
        let body: Value = require_body(request)?;
        let module = body["module"].as_str().unwrap_or_default();
        let method = body["method"].as_str().unwrap_or_default();
        match (module, method) {
            ("interwiki", "render_for_languages") => {
                let content = body["params"]["content"].as_str().unwrap_or_default();
                Ok(Some(json!({
                    "result": format!("<div class=\"interwiki\">{content}</div>")
                })))
            }
            _ => Err(not_found(format!("module {module}.{method}"))),
        }
    }
}

#[async_trait]
impl Transport for InMemoryArticleService {
    async fn send(&self, request: ApiRequest) -> ClientResult<Option<Value>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        self.handle(&mut state, &request)
    }
}
