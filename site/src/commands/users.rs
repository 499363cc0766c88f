use std::path::PathBuf;

use clap::Args;
use color_eyre::{eyre::Context, Result};
use posts::users::{manageable_users, User};

#[derive(Args, Debug)]
pub(crate) struct UsersArgs {
    /// JSON array of accounts as returned by the users API
    #[arg(long)]
    pub file: PathBuf,
}

pub(crate) fn run(args: &UsersArgs) -> Result<String> {
    let json = std::fs::read_to_string(&args.file)
        .wrap_err_with(|| format!("Could not read users from {}", args.file.display()))?;

    render(&json)
}

fn render(json: &str) -> Result<String> {
    let users: Vec<User> = serde_json::from_str(json).wrap_err("Users should be a JSON array")?;

    serde_json::to_string_pretty(&manageable_users(&users)).wrap_err("Could not serialize users")
}

#[cfg(test)]
mod test {
    use serde_json::Value;

    use super::*;

    #[test]
    fn lists_everyone_but_the_built_in_admin() {
        let out = render(
            r#"[
                { "_id": "1", "username": "admin", "role": "admin" },
                { "_id": "2", "username": "editor", "role": "uploader" }
            ]"#,
        )
        .unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["username"], "editor");
        assert_eq!(json[0]["role"], "uploader");
    }

    #[test]
    fn malformed_users_are_an_error() {
        assert!(render(r#"{ "users": [] }"#).is_err());
    }
}
