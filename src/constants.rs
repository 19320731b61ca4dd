pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ORIGIN: &str = "Origin";
}

pub mod token {
    /// Origin list entry that reflects whatever origin the request presents.
    pub const MIRROR: &str = "<mirror>";
    /// Pattern line that stands for the configured front page path.
    pub const FRONT: &str = "<front>";
}
