//! git command names, flags and the wire format used for `git log`.

pub const GIT_COMMAND: &str = "git";

/// Separates fields inside one `git log` record.
pub const FIELD_SEPARATOR: char = '\x1f';

/// Separates `git log` records.
pub const RECORD_SEPARATOR: char = '\x1e';

/// hash, author name, author email, strict ISO-8601 author date, subject.
pub const LOG_FORMAT: &str = "--pretty=format:%H%x1f%an%x1f%ae%x1f%aI%x1f%s%x1e";

/// Minimum number of fields in a complete record.
pub const LOG_FIELDS: usize = 5;

pub mod commands {
    pub const CONFIG: &str = "config";
    pub const FOR_EACH_REF: &str = "for-each-ref";
    pub const LOG: &str = "log";
}

pub mod flags {
    /// Run as if git was started in the given path
    pub const REPO_PATH: &str = "-C";
    pub const SHORT_REFNAME: &str = "--format=%(refname:short)";
    pub const NO_COLOR: &str = "--no-color";
    pub const END_OF_REVISIONS: &str = "--";
}

pub mod refs {
    pub const LOCAL_BRANCHES: &str = "refs/heads/";
}

pub mod keys {
    pub const USER_EMAIL: &str = "user.email";
}

pub mod errors {
    pub const NOT_A_REPO: &str = "not a git repository";
}
