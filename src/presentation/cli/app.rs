//! Command controller driving one screen per invocation.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::command::{Command, CredentialArgs, EntryField, GenerateArgs};
use super::render;
use crate::application::use_cases::{
    LoginUseCase, RegisterSuccessPolicy, RegisterUseCase, SessionUseCase, VaultUseCase,
};
use crate::domain::ports::{ClipboardPort, PasswordApiPort, TokenStoragePort};
use crate::presentation::lifecycle::LifecycleHandle;
use crate::presentation::state::Phase;
use crate::presentation::view_models::{
    CheckPasswordStrengthViewModel, GeneratePasswordViewModel, LoginViewModel, Navigator,
    RegisterViewModel, SavedPasswordsState, SavedPasswordsViewModel, SettingsViewModel,
};

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Screen reached its goal.
    Success,
    /// Screen ended in an error or the user is not logged in.
    Failure,
    /// Ctrl-C abandoned the in-flight request.
    Interrupted,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::SUCCESS,
            ExitStatus::Failure => Self::FAILURE,
            ExitStatus::Interrupted => Self::from(130_u8),
        }
    }
}

/// Closes a screen lifecycle on Ctrl-C while alive.
struct InterruptGuard(JoinHandle<()>);

impl InterruptGuard {
    fn watch(lifecycle: LifecycleHandle) -> Self {
        Self(tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Interrupted, closing screen");
                lifecycle.close();
            }
        }))
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs one command against the ports it was built with.
pub struct App {
    api: Arc<dyn PasswordApiPort>,
    storage_port: Arc<dyn TokenStoragePort>,
    clipboard: Arc<dyn ClipboardPort>,
    register_policy: RegisterSuccessPolicy,
}

impl App {
    /// Creates app from its adapters.
    #[must_use]
    pub fn new(
        api: Arc<dyn PasswordApiPort>,
        storage_port: Arc<dyn TokenStoragePort>,
        clipboard: Arc<dyn ClipboardPort>,
        register_policy: RegisterSuccessPolicy,
    ) -> Self {
        Self {
            api,
            storage_port,
            clipboard,
            register_policy,
        }
    }

    /// Runs `command` and writes its output to `out`.
    ///
    /// # Errors
    /// Returns error if a password prompt fails or `out` cannot be written.
    pub async fn run(&self, command: Command, out: &mut impl Write) -> Result<ExitStatus> {
        let route = command.route();
        let has_token = match self.session().current_token().await {
            Ok(token) => token.is_some(),
            Err(e) if route.requires_session() => {
                render::line(out, &e.to_string())?;
                return Ok(ExitStatus::Failure);
            }
            Err(e) => {
                warn!(error = %e, ?route, "Stored token unreadable, continuing as guest");
                false
            }
        };
        let navigator = Navigator::new(has_token);
        debug!(start = ?navigator.state().route, ?route, has_token, "Resolving screen");

        if !navigator.navigate(route, has_token) {
            render::line(out, "You are not logged in.")?;
            return finish(&navigator, ExitStatus::Failure, out);
        }
        info!(?route, "Entering screen");

        let status = match command {
            Command::Generate(args) => self.generate(args, &navigator, out).await?,
            Command::Strength { password } => self.strength(password, out).await?,
            Command::Register(args) => self.register(args, out).await?,
            Command::Login(args) => self.login(args, out).await?,
            Command::Logout => self.logout(out).await?,
            Command::Whoami => self.whoami(out).await?,
            Command::List { reveal } => self.list(reveal, &navigator, out).await?,
            Command::Copy { id, field } => self.copy(&id, field, &navigator, out).await?,
            Command::Delete { id } => self.delete(&id, &navigator, out).await?,
        };

        finish(&navigator, status, out)
    }

    fn session(&self) -> SessionUseCase {
        SessionUseCase::new(self.storage_port.clone())
    }

    fn vault(&self) -> VaultUseCase {
        VaultUseCase::new(self.api.clone(), self.storage_port.clone())
    }

    async fn generate(
        &self,
        args: GenerateArgs,
        navigator: &Navigator,
        out: &mut impl Write,
    ) -> Result<ExitStatus> {
        let vm = GeneratePasswordViewModel::new(self.api.clone(), self.vault());
        let _interrupt = InterruptGuard::watch(vm.lifecycle());

        vm.set_length(args.length.as_str());
        vm.set_classes(args.classes());
        vm.generate().await;

        let state = vm.state();
        match state.phase {
            Phase::Loading => return interrupted(out),
            Phase::Error => {
                render::line(out, state.display_text())?;
                return Ok(ExitStatus::Failure);
            }
            Phase::Idle | Phase::Success => render::line(out, state.display_text())?,
        }

        let mut status = ExitStatus::Success;
        if args.copy {
            status = self.copy_text(state.display_text(), "password", out).await?;
        }

        let Some(title) = args.save_as else {
            return Ok(status);
        };
        vm.open_save_dialog();
        vm.save(&title, args.username).await;

        let state = vm.state();
        if state.save_phase.is_loading() {
            return interrupted(out);
        }
        if let Some(error) = &state.save_error {
            render::line(out, error)?;
            if state.show_unauth_dialog {
                navigator.request_login();
                vm.dismiss_unauth_dialog();
            }
            return Ok(ExitStatus::Failure);
        }
        writeln!(out, "Saved \"{title}\".")?;
        Ok(status)
    }

    async fn strength(&self, password: Option<String>, out: &mut impl Write) -> Result<ExitStatus> {
        let password = match password {
            Some(password) => password,
            None => prompt("Password").await?,
        };

        let vm = CheckPasswordStrengthViewModel::new(self.api.clone());
        let _interrupt = InterruptGuard::watch(vm.lifecycle());
        vm.check(&password).await;

        let state = vm.state();
        if state.phase.is_loading() {
            return interrupted(out);
        }
        render::line(out, &state.result_text())?;
        Ok(status_of(state.phase))
    }

    async fn register(&self, args: CredentialArgs, out: &mut impl Write) -> Result<ExitStatus> {
        let password = credential_password(args.password).await?;

        let vm = RegisterViewModel::new(RegisterUseCase::new(
            self.api.clone(),
            self.register_policy,
        ));
        let _interrupt = InterruptGuard::watch(vm.lifecycle());
        vm.register(&args.username, &password).await;

        let state = vm.state();
        match (state.phase, &state.error, &state.notice) {
            (Phase::Loading, _, _) => interrupted(out),
            (Phase::Success, _, _) => {
                writeln!(
                    out,
                    "Account created. Log in with: passforge login --username {}",
                    args.username
                )?;
                Ok(ExitStatus::Success)
            }
            (_, _, Some(notice)) => {
                writeln!(out, "Registration not confirmed: {notice}")?;
                Ok(ExitStatus::Failure)
            }
            (_, error, None) => {
                render::line(out, error.as_deref().unwrap_or_default())?;
                Ok(ExitStatus::Failure)
            }
        }
    }

    async fn login(&self, args: CredentialArgs, out: &mut impl Write) -> Result<ExitStatus> {
        let password = credential_password(args.password).await?;

        let vm = LoginViewModel::new(LoginUseCase::new(
            self.api.clone(),
            self.storage_port.clone(),
        ));
        let _interrupt = InterruptGuard::watch(vm.lifecycle());
        vm.login(&args.username, &password).await;

        let state = vm.state();
        if state.phase.is_loading() {
            return interrupted(out);
        }
        if state.is_logged_in() {
            writeln!(out, "Logged in as {}.", state.identity.display_name())?;
            return Ok(ExitStatus::Success);
        }
        render::line(out, state.error.as_deref().unwrap_or_default())?;
        Ok(ExitStatus::Failure)
    }

    async fn logout(&self, out: &mut impl Write) -> Result<ExitStatus> {
        let vm = SettingsViewModel::new(self.session());
        vm.show_logout_dialog();
        vm.logout().await;

        let state = vm.state();
        if state.logged_out {
            render::line(out, "Logged out.")?;
            return Ok(ExitStatus::Success);
        }
        render::line(out, state.error.as_deref().unwrap_or_default())?;
        Ok(ExitStatus::Failure)
    }

    async fn whoami(&self, out: &mut impl Write) -> Result<ExitStatus> {
        let vm = SettingsViewModel::new(self.session());
        vm.load().await;

        let state = vm.state();
        if let Some(error) = &state.error {
            render::line(out, error)?;
            return Ok(ExitStatus::Failure);
        }
        render::identity(out, &state.identity)?;
        Ok(ExitStatus::Success)
    }

    async fn list(
        &self,
        reveal: bool,
        navigator: &Navigator,
        out: &mut impl Write,
    ) -> Result<ExitStatus> {
        let vm = SavedPasswordsViewModel::new(self.vault());
        let _interrupt = InterruptGuard::watch(vm.lifecycle());
        vm.enter().await;

        let state = vm.state();
        if let Some(status) = vault_failure(&state, navigator, out)? {
            return Ok(status);
        }
        render::saved_passwords(out, &state.entries, reveal)?;
        Ok(ExitStatus::Success)
    }

    async fn copy(
        &self,
        id: &str,
        field: EntryField,
        navigator: &Navigator,
        out: &mut impl Write,
    ) -> Result<ExitStatus> {
        let vm = SavedPasswordsViewModel::new(self.vault());
        let _interrupt = InterruptGuard::watch(vm.lifecycle());
        vm.enter().await;

        let state = vm.state();
        if let Some(status) = vault_failure(&state, navigator, out)? {
            return Ok(status);
        }
        let Some(entry) = state.entry(id) else {
            writeln!(out, "No saved password with id {id}.")?;
            return Ok(ExitStatus::Failure);
        };
        self.copy_text(field.of(entry), field.label(), out).await
    }

    async fn delete(&self, id: &str, navigator: &Navigator, out: &mut impl Write) -> Result<ExitStatus> {
        let vm = SavedPasswordsViewModel::new(self.vault());
        let _interrupt = InterruptGuard::watch(vm.lifecycle());
        vm.delete(id).await;

        let state = vm.state();
        if let Some(status) = vault_failure(&state, navigator, out)? {
            return Ok(status);
        }
        writeln!(out, "Deleted saved password {id}.")?;
        Ok(ExitStatus::Success)
    }

    /// Copies `text` and, where the clipboard dies with its owner, serves
    /// it until the hold ends or Ctrl-C.
    async fn copy_text(&self, text: &str, what: &str, out: &mut impl Write) -> Result<ExitStatus> {
        let lease = match self.clipboard.copy_text(text) {
            Ok(lease) => lease,
            Err(e) => {
                render::line(out, &e.to_string())?;
                return Ok(ExitStatus::Failure);
            }
        };
        writeln!(out, "Copied {what} to clipboard.")?;

        if let Some(hold) = lease.hold() {
            writeln!(
                out,
                "Keeping it available for {}s, press Ctrl-C to release it.",
                hold.as_secs()
            )?;
            out.flush()?;
            tokio::select! {
                () = lease.released() => debug!("Clipboard hold ended"),
                _ = tokio::signal::ctrl_c() => debug!("Clipboard released by user"),
            }
        }
        Ok(ExitStatus::Success)
    }
}

/// Shows the login hint when a screen asked for it.
fn finish(navigator: &Navigator, status: ExitStatus, out: &mut impl Write) -> Result<ExitStatus> {
    if navigator.state().login_requested {
        render::login_hint(out)?;
        navigator.login_prompt_shown();
    }
    debug!(?status, "Screen finished");
    Ok(status)
}

fn vault_failure(
    state: &SavedPasswordsState,
    navigator: &Navigator,
    out: &mut impl Write,
) -> Result<Option<ExitStatus>> {
    if state.phase.is_loading() {
        return interrupted(out).map(Some);
    }
    let Some(error) = &state.error else {
        return Ok(None);
    };
    render::line(out, error)?;
    if state.not_logged_in {
        navigator.request_login();
    }
    Ok(Some(ExitStatus::Failure))
}

const fn status_of(phase: Phase) -> ExitStatus {
    match phase {
        Phase::Error => ExitStatus::Failure,
        Phase::Idle | Phase::Loading | Phase::Success => ExitStatus::Success,
    }
}

fn interrupted(out: &mut impl Write) -> Result<ExitStatus> {
    render::line(out, "Cancelled.")?;
    Ok(ExitStatus::Interrupted)
}

async fn credential_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt("Password").await,
    }
}

/// Reads one line from stdin after printing `label` to stderr.
async fn prompt(label: &str) -> Result<String> {
    let mut stderr = tokio::io::stderr();
    stderr.write_all(format!("{label}: ").as_bytes()).await?;
    stderr.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::fixtures::token_with_payload;
    use crate::domain::entities::{AuthToken, SavedPassword};
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::{ApiCall, MockPasswordApi, MockTokenStorage};
    use crate::domain::ports::{ClipboardError, ClipboardLease, MockClipboardPort};
    use std::time::Duration;
    use tokio::sync::oneshot;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Command,
    }

    fn command(args: &[&str]) -> Command {
        Harness::parse_from(std::iter::once("passforge").chain(args.iter().copied())).command
    }

    fn app(
        api: &Arc<MockPasswordApi>,
        storage: &Arc<MockTokenStorage>,
        clipboard: MockClipboardPort,
    ) -> App {
        App::new(
            api.clone(),
            storage.clone(),
            Arc::new(clipboard),
            RegisterSuccessPolicy::ExactMessage,
        )
    }

    async fn run(app: &App, args: &[&str]) -> (ExitStatus, String) {
        let mut out = Vec::new();
        let status = app.run(command(args), &mut out).await.unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    fn signed_in() -> Arc<MockTokenStorage> {
        Arc::new(MockTokenStorage::with_token(AuthToken::new(token_with_payload(
            r#"{"username":"alice"}"#,
        ))))
    }

    fn vault_entries() -> Vec<SavedPassword> {
        vec![SavedPassword {
            id: Some("7".to_string()),
            title: "Email".to_string(),
            username: "alice@example.com".to_string(),
            password: "Xx1!".to_string(),
        }]
    }

    #[tokio::test]
    async fn test_generate_and_copy() {
        let api = Arc::new(MockPasswordApi::new());
        let mut clipboard = MockClipboardPort::new();
        clipboard
            .expect_copy_text()
            .withf(|text| text == "Gen3rated!Pass")
            .times(1)
            .returning(|_| Ok(ClipboardLease::detached()));
        let app = app(&api, &Arc::new(MockTokenStorage::new()), clipboard);

        let (status, out) = run(&app, &["generate", "--copy"]).await;

        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "Gen3rated!Pass\nCopied password to clipboard.\n");
    }

    #[tokio::test]
    async fn test_copy_waits_for_held_clipboard() {
        let api = Arc::new(MockPasswordApi::new());
        let mut clipboard = MockClipboardPort::new();
        clipboard.expect_copy_text().times(1).returning(|_| {
            let (released, rx) = oneshot::channel();
            released.send(()).unwrap();
            Ok(ClipboardLease::held(Duration::from_secs(30), rx))
        });
        let app = app(&api, &Arc::new(MockTokenStorage::new()), clipboard);

        let (status, out) = run(&app, &["generate", "--copy"]).await;

        assert_eq!(status, ExitStatus::Success);
        assert_eq!(
            out,
            "Gen3rated!Pass\n\
             Copied password to clipboard.\n\
             Keeping it available for 30s, press Ctrl-C to release it.\n"
        );
    }

    #[tokio::test]
    async fn test_generate_rejects_short_length() {
        let api = Arc::new(MockPasswordApi::new());
        let app = app(&api, &Arc::new(MockTokenStorage::new()), MockClipboardPort::new());

        let (status, out) = run(&app, &["generate", "--length", "3"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(out, "Invalid password length. Must be at least 4.\n");
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clipboard_failure_is_reported() {
        let api = Arc::new(MockPasswordApi::new());
        let mut clipboard = MockClipboardPort::new();
        clipboard
            .expect_copy_text()
            .returning(|_| Err(ClipboardError("no display".to_string())));
        let app = app(&api, &Arc::new(MockTokenStorage::new()), clipboard);

        let (status, out) = run(&app, &["generate", "--copy"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert!(out.ends_with("clipboard unavailable: no display\n"));
    }

    #[tokio::test]
    async fn test_guest_save_prompts_login() {
        let api = Arc::new(MockPasswordApi::new());
        let app = app(&api, &Arc::new(MockTokenStorage::new()), MockClipboardPort::new());

        let (status, out) = run(&app, &["generate", "--save-as", "Email"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(
            out,
            "Gen3rated!Pass\n\
             You need to be logged in to save a password.\n\
             Log in first: passforge login --username <name>\n"
        );
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_signed_in_save() {
        let api = Arc::new(MockPasswordApi::new());
        let app = app(&api, &signed_in(), MockClipboardPort::new());

        let (status, out) = run(
            &app,
            &["generate", "--save-as", "Email", "--username", "alice"],
        )
        .await;

        assert_eq!(status, ExitStatus::Success);
        assert!(out.ends_with("Saved \"Email\".\n"));
        assert!(api.calls().iter().any(|call| matches!(
            call,
            ApiCall::Save(_, entry) if entry.title == "Email" && entry.username == "alice"
        )));
    }

    #[tokio::test]
    async fn test_guest_list_never_reaches_network() {
        let api = Arc::new(MockPasswordApi::new());
        let app = app(&api, &Arc::new(MockTokenStorage::new()), MockClipboardPort::new());

        let (status, out) = run(&app, &["list"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(
            out,
            "You are not logged in.\nLog in first: passforge login --username <name>\n"
        );
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_masks_unless_revealed() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_listed(Ok(vault_entries()));
        let app = app(&api, &signed_in(), MockClipboardPort::new());

        let (_, masked) = run(&app, &["list"]).await;
        let (_, revealed) = run(&app, &["list", "--reveal"]).await;

        assert!(!masked.contains("Xx1!"));
        assert!(revealed.contains("Xx1!"));
    }

    #[tokio::test]
    async fn test_copy_username_of_entry() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_listed(Ok(vault_entries()));
        let mut clipboard = MockClipboardPort::new();
        clipboard
            .expect_copy_text()
            .withf(|text| text == "alice@example.com")
            .times(1)
            .returning(|_| Ok(ClipboardLease::detached()));
        let app = app(&api, &signed_in(), clipboard);

        let (status, out) = run(&app, &["copy", "7", "--field", "username"]).await;

        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "Copied username to clipboard.\n");
    }

    #[tokio::test]
    async fn test_copy_unknown_id() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_listed(Ok(vault_entries()));
        let app = app(&api, &signed_in(), MockClipboardPort::new());

        let (status, out) = run(&app, &["copy", "8"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(out, "No saved password with id 8.\n");
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let api = Arc::new(MockPasswordApi::new());
        api.set_deleted(Err(ApiError::application(404, Some("Not found".to_string()))));
        let app = app(&api, &signed_in(), MockClipboardPort::new());

        let (status, out) = run(&app, &["delete", "7"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(out, "Failed to delete password: Not found\n");
    }

    #[tokio::test]
    async fn test_login_whoami_logout() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        let app = app(&api, &storage, MockClipboardPort::new());

        let (status, out) = run(&app, &["login", "-u", "alice", "-p", "pw1"]).await;
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "Logged in as alice.\n");

        let (_, out) = run(&app, &["whoami"]).await;
        assert_eq!(out, "Logged in as alice\n");

        let (status, out) = run(&app, &["logout"]).await;
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "Logged out.\n");

        let (_, out) = run(&app, &["whoami"]).await;
        assert_eq!(out, "Not logged in (Guest)\n");
    }

    #[tokio::test]
    async fn test_whoami_with_unreadable_token() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::with_token(AuthToken::new("garbage")));
        let app = app(&api, &storage, MockClipboardPort::new());

        let (status, out) = run(&app, &["whoami"]).await;

        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "Logged in (stored token unreadable)\n");
    }

    #[tokio::test]
    async fn test_register_outcomes() {
        let api = Arc::new(MockPasswordApi::new());
        let app = app(&api, &Arc::new(MockTokenStorage::new()), MockClipboardPort::new());

        let (status, out) = run(&app, &["register", "-u", "bob", "-p", "pw"]).await;
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(
            out,
            "Account created. Log in with: passforge login --username bob\n"
        );

        api.set_registered(Ok(crate::domain::entities::RegisterResponse {
            message: "User created".to_string(),
        }));
        let (status, out) = run(&app, &["register", "-u", "bob", "-p", "pw"]).await;
        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(out, "Registration not confirmed: User created\n");
    }

    #[tokio::test]
    async fn test_strength_summary() {
        let api = Arc::new(MockPasswordApi::new());
        let app = app(&api, &Arc::new(MockTokenStorage::new()), MockClipboardPort::new());

        let (status, out) = run(&app, &["strength", "hunter2"]).await;

        assert_eq!(status, ExitStatus::Success);
        assert!(out.starts_with("Score: 3\n"));
        assert!(out.ends_with("Crack Time: 3 years\n"));
    }

    #[tokio::test]
    async fn test_unreadable_token_store_leaves_guest_screens_usable() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        storage.fail_reads();
        let app = app(&api, &storage, MockClipboardPort::new());

        let (status, out) = run(&app, &["generate"]).await;
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(out, "Gen3rated!Pass\n");

        let (status, out) = run(&app, &["strength", "hunter2"]).await;
        assert_eq!(status, ExitStatus::Success);
        assert!(out.starts_with("Score: 3\n"));
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unreadable_token_store_is_reported_for_vault() {
        let api = Arc::new(MockPasswordApi::new());
        let storage = Arc::new(MockTokenStorage::new());
        storage.fail_reads();
        let app = app(&api, &storage, MockClipboardPort::new());

        let (status, out) = run(&app, &["list"]).await;

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(
            out,
            "failed to read stored token: secret service unavailable\n"
        );
        assert_eq!(api.call_count(), 0);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::FAILURE);
    }
}
