use super::commands::CredentialArgs;
use anyhow::{Context, Result, bail};
use dialoguer::{Input, Password};
use edusp_tasks::credentials::Credentials;
use std::io::IsTerminal;

/// Resolve credentials from flags/environment, prompting on a terminal for
/// whatever is missing. Blank values are rejected either way.
pub fn collect_credentials(args: CredentialArgs) -> Result<Credentials> {
    let interactive = std::io::stdin().is_terminal();

    let ra = match args.ra {
        Some(ra) => ra,
        None if interactive => Input::<String>::new()
            .with_prompt("RA")
            .interact_text()
            .context("Failed to read RA from terminal")?,
        None => bail!("--ra (or EDUSP_RA) is required in non-interactive mode"),
    };

    let senha = match args.senha {
        Some(senha) => senha,
        None if interactive => Password::new()
            .with_prompt("Senha (input hidden)")
            .allow_empty_password(false)
            .interact()
            .context("Failed to read password from terminal")?,
        None => bail!("--senha (or EDUSP_SENHA) is required in non-interactive mode"),
    };

    Credentials::new(ra, senha).context("Please fill in both RA and password")
}
