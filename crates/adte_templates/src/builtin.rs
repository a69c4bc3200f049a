//! Built-in role templates, embedded at compile time.

pub const ROLE_MD_NAME: &str = "role.md.j2";
pub const ROLE_RST_NAME: &str = "role.rst.j2";

pub const ROLE_MD: &str = include_str!("../templates/role.md.j2");
pub const ROLE_RST: &str = include_str!("../templates/role.rst.j2");

/// All built-in templates as `(name, source)` pairs.
pub const TEMPLATES: [(&str, &str); 2] = [(ROLE_MD_NAME, ROLE_MD), (ROLE_RST_NAME, ROLE_RST)];
