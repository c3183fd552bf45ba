//! Subcommands, one per screen.

use clap::{Args, Subcommand, ValueEnum};

use crate::domain::entities::{CharacterClasses, SavedPassword};
use crate::presentation::view_models::Route;

/// What to do in this invocation.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a password on the server.
    Generate(GenerateArgs),

    /// Score a password. Prompted for when omitted.
    Strength {
        /// Password to check.
        password: Option<String>,
    },

    /// Create an account.
    Register(CredentialArgs),

    /// Log in and remember the session.
    Login(CredentialArgs),

    /// Forget the stored session.
    Logout,

    /// Show who is logged in.
    Whoami,

    /// List saved passwords.
    List {
        /// Show passwords instead of masking them.
        #[arg(long)]
        reveal: bool,
    },

    /// Copy a field of a saved password to the clipboard.
    Copy {
        /// Id of the saved password.
        id: String,

        /// Field to copy.
        #[arg(long, value_enum, default_value_t = EntryField::Password)]
        field: EntryField,
    },

    /// Delete a saved password.
    Delete {
        /// Id of the saved password.
        id: String,
    },
}

impl Command {
    /// Returns the screen this command drives.
    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::Generate(_) => Route::GeneratePassword,
            Self::Strength { .. } => Route::CheckPasswordStrength,
            Self::Register(_) => Route::Register,
            Self::Login(_) => Route::Login,
            Self::Logout | Self::Whoami => Route::Settings,
            Self::List { .. } | Self::Copy { .. } | Self::Delete { .. } => Route::SavedPasswords,
        }
    }
}

/// Options of `generate`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Password length, at least 4.
    #[arg(short, long, default_value = "12")]
    pub length: String,

    /// Leave out `A-Z`.
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out `a-z`.
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out `0-9`.
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols.
    #[arg(long)]
    pub no_special: bool,

    /// Copy the generated password to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Save the generated password under this title.
    #[arg(long, value_name = "TITLE")]
    pub save_as: Option<String>,

    /// Username stored with the saved password.
    #[arg(long, requires = "save_as")]
    pub username: Option<String>,
}

impl GenerateArgs {
    /// Returns the selected character classes.
    #[must_use]
    pub const fn classes(&self) -> CharacterClasses {
        CharacterClasses {
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            special: !self.no_special,
        }
    }
}

/// Account credentials.
#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    /// Account name.
    #[arg(short, long)]
    pub username: String,

    /// Account password. Prompted for when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Field of a saved password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EntryField {
    /// The stored secret.
    #[default]
    Password,
    /// The account name.
    Username,
}

impl EntryField {
    /// Returns the value of this field in `entry`.
    #[must_use]
    pub fn of(self, entry: &SavedPassword) -> &str {
        match self {
            Self::Password => &entry.password,
            Self::Username => &entry.username,
        }
    }

    /// Returns the name shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Username => "username",
        }
    }
}
