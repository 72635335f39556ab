use std::io;

use clap::Args;
use colored::Colorize;
use eyre::{bail, Result, WrapErr};
use servicelogger::{EntryRepository, OcmClient};

use super::config::{ConnectionArgs, FileConfig};

#[derive(Debug, Args)]
pub struct PostArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Text of the internal note; `-` reads it from stdin
    pub description: String,
}

impl PostArgs {
    pub fn run(&self, file: &FileConfig) -> Result<()> {
        let connection = self.connection.resolve(file)?;
        let description = read_description(&self.description, io::stdin())?;

        let client = OcmClient::new(&connection.ocm_url, &connection.ocm_token)
            .wrap_err("failed to build OCM client")?;
        EntryRepository::new(client)
            .post(&connection.cluster_id, &description)
            .wrap_err_with(|| {
                format!(
                    "failed to post service log to cluster {}",
                    connection.cluster_id
                )
            })?;

        println!(
            "{} internal service log posted to cluster {}",
            "✔".green().bold(),
            connection.cluster_id.bold()
        );
        Ok(())
    }
}

fn read_description(argument: &str, stdin: impl io::Read) -> Result<String> {
    let description = if argument == "-" {
        io::read_to_string(stdin).wrap_err("failed to read description from stdin")?
    } else {
        argument.to_string()
    };

    let description = description.trim();
    if description.is_empty() {
        bail!("description must not be empty");
    }
    Ok(description.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_is_used_verbatim() {
        let description = read_description("Rebooted nodes", io::empty()).unwrap();
        assert_eq!(description, "Rebooted nodes");
    }

    #[test]
    fn test_dash_reads_stdin() {
        let stdin = io::Cursor::new("Line one\nLine two\n");

        let description = read_description("-", stdin).unwrap();

        assert_eq!(description, "Line one\nLine two");
    }

    #[test]
    fn test_empty_description_is_rejected() {
        assert!(read_description("-", io::empty()).is_err());
        assert!(read_description("  ", io::empty()).is_err());
    }
}
