//! Main application UI.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout, RichText};
use tokio::sync::mpsc;

use crate::auth::{Authenticator, MockAuthenticator, Role};
use crate::config::AppConfig;
use crate::export;
use crate::gate::{self, GateDecision};
use crate::import::{self, ImportTable};
use crate::intake::{IntakeForm, LoggingSink, SubmissionSink};
use crate::session::Session;

use super::components::colors;
use super::{admin_panel, dashboard, intake_panel, login_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    Login,
    #[default]
    Dashboard,
    Intake,
    Admin,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Login => "Sign In",
            Panel::Dashboard => "Dashboard",
            Panel::Intake => "Influencer Profile",
            Panel::Admin => "Admin Panel",
        }
    }

    /// Whether the panel sits behind the access gate.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Panel::Login)
    }

    /// Roles allowed to view the panel; `None` admits any signed-in user.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Panel::Admin => Some(&[Role::SuperAdmin, Role::Admin]),
            _ => None,
        }
    }
}

/// Bulk import state.
#[derive(Debug, Clone, Default)]
pub enum ImportState {
    #[default]
    Idle,
    Uploading,
    Completed {
        records: usize,
    },
    Failed(String),
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    ImportCompleted(ImportTable),
    ImportFailed(String),
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Main application state.
pub struct App {
    // Runtime
    pub rt: tokio::runtime::Runtime,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Session and collaborator seams
    pub session: Session,
    authenticator: Box<dyn Authenticator + Send>,
    submission_sink: Box<dyn SubmissionSink + Send>,

    // Navigation
    pub current_panel: Panel,

    // Intake form
    pub intake: IntakeForm,

    // Bulk import
    pub table: ImportTable,
    pub import_state: ImportState,

    // Login inputs
    pub login_email: String,
    pub login_password: String,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,

    // Dialogs
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(
        config: AppConfig,
        session: Session,
        rt: tokio::runtime::Runtime,
        initial_error: Option<String>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut app = Self {
            rt,
            tx,
            rx,
            session,
            authenticator: Box::new(MockAuthenticator),
            submission_sink: Box::new(LoggingSink),
            current_panel: Panel::default(),
            intake: IntakeForm::new(),
            table: ImportTable::default(),
            import_state: ImportState::default(),
            login_email: String::new(),
            login_password: String::new(),
            log_messages: Vec::new(),
            config,
            error_message: initial_error,
            success_message: None,
        };

        if let Some(identity) = app.session.identity() {
            let email = identity.email.clone();
            app.log_info(format!("Restored session for {}", email));
        }

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Sign in with the credentials from the login panel.
    pub fn sign_in(&mut self) {
        let email = self.login_email.trim().to_string();
        let password = self.login_password.clone();

        match self.session.login(self.authenticator.as_ref(), &email, &password) {
            Ok(identity) => {
                let message = format!("Signed in as {} ({})", identity.email, identity.role);
                self.login_email.clear();
                self.login_password.clear();
                self.current_panel = Panel::Dashboard;
                self.log_success(message);
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.log_error(format!("Sign-in failed: {}", e));
            }
        }
    }

    /// Sign out and return to the login panel.
    pub fn sign_out(&mut self) {
        self.session.logout();
        self.current_panel = Panel::Login;
        self.log_info("Signed out");
    }

    /// Pick a CSV file and parse it in the background.
    ///
    /// A second selection while a parse is in flight is not prevented;
    /// whichever completion arrives last wins.
    pub fn start_import(&mut self) {
        let Some(path) = export::show_open_dialog() else {
            return;
        };

        self.import_state = ImportState::Uploading;
        self.log_info(format!("Importing {:?}", path));

        let delimiter = self.config.import.delimiter_byte();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match import::parse_file(&path, delimiter) {
                Ok(table) => {
                    let _ = tx.send(UiMessage::ImportCompleted(table));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::ImportFailed(e.to_string()));
                }
            }
        });
    }

    /// Export the imported table to a CSV file.
    pub fn export_csv(&mut self) {
        let Some(path) = export::show_save_dialog(export::CSV_EXPORT_NAME, "csv", "CSV Files") else {
            return;
        };

        match export::export_table_to_csv(&self.table, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported {} records to CSV", self.table.len()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Export the imported table to an Excel file.
    pub fn export_excel(&mut self) {
        let Some(path) = export::show_save_dialog(export::XLSX_EXPORT_NAME, "xlsx", "Excel Files") else {
            return;
        };

        match export::export_table_to_excel(&self.table, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported {} records to Excel", self.table.len()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Hand the completed intake record to the submission sink.
    pub fn submit_intake(&mut self) {
        match self.submission_sink.submit(&self.intake.record) {
            Ok(()) => {
                let name = self.intake.record.name.clone();
                self.intake.reset();
                self.current_panel = Panel::Dashboard;
                self.success_message = Some("Profile submitted".to_string());
                self.log_success(format!("Submitted profile for '{}'", name));
            }
            Err(e) => {
                self.error_message = Some(format!("Submission failed: {}", e));
                self.log_error(format!("Submission failed: {}", e));
            }
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::ImportCompleted(table) => {
                    let records = table.len();
                    self.table = table;
                    self.import_state = ImportState::Completed { records };
                    self.log_success(format!("Imported {} records", records));
                }
                UiMessage::ImportFailed(e) => {
                    self.import_state = ImportState::Failed(e.clone());
                    self.error_message = Some(format!("Import failed: {}", e));
                    self.log_error(format!("Import failed: {}", e));
                }
            }
        }
    }

    /// Resolve the requested panel through the access gate.
    ///
    /// The previous navigation state is overwritten on redirect, so there is
    /// no back-navigation loop to fall into.
    fn apply_gate(&mut self) {
        if !self.current_panel.is_protected() {
            return;
        }

        match gate::check(self.session.identity(), self.current_panel.allowed_roles()) {
            GateDecision::Render => {}
            GateDecision::RedirectLogin => {
                self.current_panel = Panel::Login;
            }
            GateDecision::RedirectDashboard => {
                self.current_panel = Panel::Dashboard;
            }
        }
    }

    /// Render top bar with app title and session controls.
    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Influencer Desk").size(16.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let identity = self.session.identity().cloned();
                    if let Some(identity) = identity {
                        if ui.button("Sign Out").clicked() {
                            self.sign_out();
                        }
                        ui.label(RichText::new(format!("{} ({})", identity.name, identity.role)).weak());
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    // Session status (left side)
                    let (color, text) = match self.session.identity() {
                        Some(identity) => (colors::SUCCESS, format!("Signed in: {}", identity.email)),
                        None => (colors::NEUTRAL, "Not signed in".to_string()),
                    };
                    ui.colored_label(color, text);

                    // Import activity (right side)
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if matches!(self.import_state, ImportState::Uploading) {
                            ui.label("Importing...");
                            ui.spinner();
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, success).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if matches!(self.import_state, ImportState::Uploading) {
            ctx.request_repaint();
        }

        // Access gate runs before anything renders
        self.apply_gate();

        // Top bar
        self.show_top_bar(ctx);

        // Status bar
        self.show_status_bar(ctx);

        // Modal dialogs (error, success)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Login => {
                login_panel::show(self, ui);
            }
            Panel::Dashboard => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.current_panel = next;
                }
            }
            Panel::Intake => match intake_panel::show(self, ui) {
                intake_panel::Action::None => {}
                intake_panel::Action::GoBack => {
                    self.current_panel = Panel::Dashboard;
                }
                intake_panel::Action::Submit => {
                    self.submit_intake();
                }
            },
            Panel::Admin => match admin_panel::show(self, ui) {
                admin_panel::Action::None => {}
                admin_panel::Action::GoBack => {
                    self.current_panel = Panel::Dashboard;
                }
                admin_panel::Action::StartImport => {
                    self.start_import();
                }
                admin_panel::Action::ExportCsv => {
                    self.export_csv();
                }
                admin_panel::Action::ExportExcel => {
                    self.export_excel();
                }
            },
        });
    }
}
