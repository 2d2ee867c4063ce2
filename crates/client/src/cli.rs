//! Command-line front end for the `gcms-client` binary

use std::io::Write;

use gcms_domain::{CollectionKind, LoginCredentials, RegisterData};
use thiserror::Error;

use crate::state::AppState;
use crate::ui::{NavSection, APP_SUBTITLE, APP_TITLE};

pub const USAGE: &str = "usage: gcms-client [status | login <email> | register <email> <name> <company> | logout | templates | nav [path]]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown command '{0}'\n{usage}", usage = USAGE)]
    UnknownCommand(String),

    #[error("wrong arguments for '{0}'\n{usage}", usage = USAGE)]
    BadArguments(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Login { email: String },
    Register { email: String, name: String, company: String },
    Logout,
    Templates,
    Nav { path: String },
}

impl Command {
    /// Parse arguments following the program name. No arguments means `status`.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            [] | ["status"] => Ok(Command::Status),
            ["login", email] => Ok(Command::Login {
                email: email.to_string(),
            }),
            ["register", email, name, company] => Ok(Command::Register {
                email: email.to_string(),
                name: name.to_string(),
                company: company.to_string(),
            }),
            ["logout"] => Ok(Command::Logout),
            ["templates"] => Ok(Command::Templates),
            ["nav"] => Ok(Command::Nav {
                path: NavSection::Dashboard.path().to_string(),
            }),
            ["nav", path] => Ok(Command::Nav {
                path: path.to_string(),
            }),
            [name @ ("status" | "login" | "register" | "logout" | "templates" | "nav"), ..] => {
                Err(CliError::BadArguments(name.to_string()))
            }
            [other, ..] => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

/// Execute `command` against `state`, writing human-readable output to `out`.
pub async fn run(command: Command, state: &mut AppState, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Status => write_status(state, out)?,
        Command::Login { email } => {
            // The local identity provider does not check passwords
            let credentials = LoginCredentials::new(email, String::new());
            state.session_mut().login(&credentials).await?;
            write_status(state, out)?;
        }
        Command::Register {
            email,
            name,
            company,
        } => {
            let data = RegisterData {
                email,
                name,
                company,
                password: String::new(),
            };
            state.session_mut().register(&data).await?;
            write_status(state, out)?;
        }
        Command::Logout => {
            state.session_mut().logout();
            write_status(state, out)?;
        }
        Command::Templates => {
            for template in state.collections().templates() {
                writeln!(
                    out,
                    "{:<4} {:<22} {}",
                    template.id.as_str(),
                    template.category.display_name(),
                    template.name
                )?;
            }
        }
        Command::Nav { path } => {
            writeln!(out, "{APP_TITLE} - {APP_SUBTITLE}")?;
            for section in NavSection::all() {
                let marker = if section.is_active(&path) { '*' } else { ' ' };
                writeln!(out, "{marker} {:<18} {}", section.label(), section.path())?;
            }
        }
    }
    Ok(())
}

fn write_status(state: &AppState, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{APP_TITLE} - {APP_SUBTITLE}")?;
    match state.session().user() {
        Some(user) => writeln!(
            out,
            "Signed in as {} <{}> ({})",
            user.name, user.email, user.company
        )?,
        None => writeln!(out, "Not signed in")?,
    }
    for kind in CollectionKind::all() {
        writeln!(
            out,
            "{:<22} {}",
            kind.display_name(),
            state.collections().len_of(*kind)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use crate::infrastructure::LocalIdentityProvider;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::load(
            Arc::new(MemoryStorageProvider::new()),
            Arc::new(LocalIdentityProvider),
        )
    }

    async fn output_of(command: Command, state: &mut AppState) -> String {
        let mut out = Vec::new();
        run(command, state, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(Vec::<String>::new()), Ok(Command::Status));
        assert_eq!(
            Command::parse(["login", "a@b.com"]),
            Ok(Command::Login {
                email: "a@b.com".to_string()
            })
        );
        assert_eq!(
            Command::parse(["nav"]),
            Ok(Command::Nav {
                path: "/".to_string()
            })
        );
        assert_eq!(
            Command::parse(["register", "a@b.com", "Pat"]),
            Err(CliError::BadArguments("register".to_string()))
        );
        assert_eq!(
            Command::parse(["deploy"]),
            Err(CliError::UnknownCommand("deploy".to_string()))
        );
    }

    #[tokio::test]
    async fn test_login_then_status() {
        let mut state = state();

        let out = output_of(
            Command::Login {
                email: "jane@agency.gov".to_string(),
            },
            &mut state,
        )
        .await;

        assert!(out.contains("Signed in as jane <jane@agency.gov> (My Company)"));
        assert!(out.contains("Templates"));
    }

    #[tokio::test]
    async fn test_templates_lists_builtins() {
        let mut state = state();

        let out = output_of(Command::Templates, &mut state).await;

        assert_eq!(out.lines().count(), 4);
        assert!(out.lines().next().unwrap().starts_with("1 "));
    }

    #[tokio::test]
    async fn test_nav_marks_active_section() {
        let mut state = state();

        let out = output_of(
            Command::Nav {
                path: "/proposals/p-1".to_string(),
            },
            &mut state,
        )
        .await;

        let active: Vec<&str> = out.lines().filter(|line| line.starts_with('*')).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("Proposals"));
    }
}
