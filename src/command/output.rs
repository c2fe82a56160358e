use chrono::DateTime;
use serde::Serialize;
use serde_json::{Value, json};
use synmetrix_client::{
    auth::{AccessTokenClaims, AuthTokens},
    operations::{user::current::UserProfile, version::create::CreatedVersion},
};

use crate::{Result, cli::FormatType};

/// SynmetrixOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of the commands should return this type, and its
/// print logic should be handled in `SynmetrixOutput::print`. Labels go to
/// `stderr` so that piping `stdout` captures only the data.
#[derive(Debug, Clone, PartialEq)]
pub enum SynmetrixOutput {
    Uploaded {
        models: Vec<String>,
        checksum: String,
        version: Option<CreatedVersion>,
    },
    NothingToUpload {
        reason: String,
    },
    Whoami {
        claims: AccessTokenClaims,
        user: Option<UserProfile>,
    },
    TokenClaims(AccessTokenClaims),
    Tokens(AuthTokens),
}

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    json_version: &'static str,
    data: Value,
}

impl SynmetrixOutput {
    pub fn print(&self, format: FormatType) -> Result<()> {
        match format {
            FormatType::Plain => self.print_plain(),
            FormatType::Json => println!("{}", serde_json::to_string_pretty(&self.get_json())?),
        }
        Ok(())
    }

    fn print_plain(&self) {
        match self {
            SynmetrixOutput::Uploaded {
                models,
                checksum,
                version,
            } => {
                eprintln!("Uploaded {} data models:", models.len());
                for model in models {
                    println!("{model}");
                }
                eprint!("Checksum: ");
                println!("{checksum}");
                if let Some(version) = version {
                    eprint!("Version: ");
                    println!("{}", version.id);
                }
            }
            SynmetrixOutput::NothingToUpload { reason } => eprintln!("{reason}"),
            SynmetrixOutput::Whoami { claims, user } => {
                print_claims(claims);
                match user {
                    Some(user) => {
                        if let Some(display_name) = &user.display_name {
                            eprint!("Name: ");
                            println!("{display_name}");
                        }
                        for member in &user.members {
                            eprint!("Team: ");
                            println!(
                                "{} ({})",
                                member.team.name.as_deref().unwrap_or("unnamed"),
                                member.team.id
                            );
                        }
                    }
                    None => eprintln!("The user could not be found."),
                }
            }
            SynmetrixOutput::TokenClaims(claims) => print_claims(claims),
            SynmetrixOutput::Tokens(tokens) => {
                eprint!("Access token: ");
                println!("{}", tokens.access_token);
                eprint!("Refresh token: ");
                println!("{}", tokens.refresh_token);
                eprint!("Expires: ");
                println!("{}", expiry(tokens.access_token_expires_at));
            }
        }
    }

    pub fn get_json(&self) -> JsonOutput {
        let data = match self {
            SynmetrixOutput::Uploaded {
                models,
                checksum,
                version,
            } => json!({ "models": models, "checksum": checksum, "version": version }),
            SynmetrixOutput::NothingToUpload { reason } => {
                json!({ "models": [], "reason": reason })
            }
            SynmetrixOutput::Whoami { claims, user } => json!({ "claims": claims, "user": user }),
            SynmetrixOutput::TokenClaims(claims) => Value::Object(claims.claims.clone()),
            SynmetrixOutput::Tokens(tokens) => json!(tokens),
        };
        JsonOutput {
            json_version: "1",
            data,
        }
    }
}

fn print_claims(claims: &AccessTokenClaims) {
    eprint!("User: ");
    println!("{}", claims.user_id.as_deref().unwrap_or("none"));
    eprint!("Roles: ");
    println!("{}", claims.allowed_roles.join(", "));
    if let Some(default_role) = &claims.default_role {
        eprint!("Default role: ");
        println!("{default_role}");
    }
    eprint!("Expires: ");
    println!("{}", expiry(claims.access_token_expires_at));
}

fn expiry(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map_or_else(|| timestamp.to_string(), |expires| expires.to_rfc3339())
}
