use std::collections::HashMap;
use std::sync::Arc;

use pathcors::{PatternSetMatcher, PolicyMap, PolicyResolver};

pub type SharedResolver = Arc<PolicyResolver<PatternSetMatcher>>;
pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub resolver: SharedResolver,
    aliases: HashMap<String, String>,
    pub greeting: &'static str,
}

impl AppState {
    /// Alias-resolved form of `path`; the path itself when no alias applies.
    pub fn canonical_path(&self, path: &str) -> String {
        self.aliases
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_owned())
    }
}

fn demo_rules() -> PolicyMap {
    let mut rules = PolicyMap::new();
    rules.insert(
        "/api/*".to_owned(),
        "https://app.example.com, https://admin.example.com|GET, POST|Content-Type, X-Requested-With|true"
            .to_owned(),
    );
    rules.insert("/about".to_owned(), "<mirror>|GET".to_owned());
    rules
}

fn demo_aliases() -> HashMap<String, String> {
    HashMap::from([("/who-we-are".to_owned(), "/about".to_owned())])
}

pub fn build_state() -> SharedAppState {
    Arc::new(AppState {
        resolver: Arc::new(PolicyResolver::new(demo_rules(), PatternSetMatcher::new())),
        aliases: demo_aliases(),
        greeting: "Welcome to the hyper CORS demo!",
    })
}

pub mod middleware;
