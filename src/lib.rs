pub mod constants;

mod context;
mod header_builder;
mod headers;
mod matcher;
mod origin;
mod path_pattern;
mod policy;
mod request_headers;
mod resolver;
mod result;
mod rule;
mod util;

pub use context::RequestContext;
pub use headers::ResolvedHeaders;
pub use matcher::{MatchError, PathMatcher};
pub use origin::{OriginAllowList, OriginDecision};
pub use path_pattern::{PatternError, PatternSet, PatternSetMatcher};
pub use policy::ParsedPolicy;
pub use request_headers::RequestHeaders;
pub use resolver::PolicyResolver;
pub use result::ResolveError;
pub use rule::{PolicyMap, PolicyRule};
