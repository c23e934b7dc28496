//! Main application component.

use crate::components::add_item_form::{AddItemForm, AddItemFormInput, AddItemFormOutput};
use crate::components::auth_form::{AuthForm, AuthFormInput, AuthFormOutput};
use crate::components::dashboard::{Dashboard, DashboardInput, DashboardOutput};
use crate::config::Config;
use stockrs_core::store::{self, Action, AppState};
use stockrs_core::{ApiClient, ApiError, AuthRequest, InventoryItem, NewItem, Session};

use gtk4::prelude::*;
use relm4::prelude::*;

/// Main app messages.
#[derive(Debug)]
pub enum AppInput {
    /// Open the auth dialog in login mode.
    OpenLogin,
    /// Open the auth dialog in signup mode.
    OpenSignup,
    /// Auth dialog was dismissed.
    AuthCancelled,
    /// Credentials submitted from the auth dialog.
    Authenticate {
        username: String,
        password: String,
        email: Option<String>,
        is_admin: bool,
        is_user: bool,
    },
    /// Login/signup settled.
    AuthFinished(Result<Session, ApiError>),
    /// Logout requested.
    Logout,
    /// Logout settled.
    LogoutFinished(Result<(), ApiError>),
    /// Request the item collection for the active session.
    FetchItems,
    /// An item fetch settled. `generation` identifies which fetch.
    FetchFinished {
        generation: u64,
        result: Result<Vec<InventoryItem>, ApiError>,
    },
    /// Open the add-item dialog.
    OpenAddForm,
    /// Add-item dialog was dismissed.
    AddFormCancelled,
    /// A candidate item submitted from the add-item dialog.
    AddItem(NewItem),
    /// Item creation settled.
    AddFinished(Result<InventoryItem, ApiError>),
    /// Delete the item with this id.
    DeleteItem(i64),
    /// Item deletion settled.
    DeleteFinished {
        id: i64,
        result: Result<(), ApiError>,
    },
    /// Search text edited.
    SearchChanged(String),
}

/// Main application model.
pub struct App {
    state: AppState,
    api: ApiClient,

    // Child components
    auth_form: Controller<AuthForm>,
    add_item_form: Controller<AddItemForm>,
    dashboard: Controller<Dashboard>,
}

#[relm4::component(pub)]
impl Component for App {
    type Init = Config;
    type Input = AppInput;
    type Output = ();
    type CommandOutput = ();

    view! {
        #[name = "main_window"]
        gtk4::ApplicationWindow {
            set_title: Some("Hardware Inventory"),
            set_default_width: config.window_width,
            set_default_height: config.window_height,

            gtk4::Box {
                set_orientation: gtk4::Orientation::Vertical,
                set_spacing: 0,

                // Header: title, search, session controls
                gtk4::Box {
                    set_orientation: gtk4::Orientation::Horizontal,
                    set_spacing: 12,
                    set_margin_all: 16,

                    gtk4::Label {
                        set_text: "Hardware Inventory",
                        add_css_class: "title-1",
                    },

                    gtk4::SearchEntry {
                        set_placeholder_text: Some("Search name, serial, location"),
                        set_hexpand: true,
                        set_max_width_chars: 32,
                        #[watch]
                        set_visible: model.state.session.is_some(),
                        connect_search_changed[sender] => move |entry| {
                            sender.input(AppInput::SearchChanged(entry.text().to_string()));
                        },
                    },

                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Horizontal,
                        set_spacing: 8,
                        set_halign: gtk4::Align::End,
                        set_hexpand: true,

                        gtk4::Label {
                            #[watch]
                            set_label: &model
                                .state
                                .session
                                .as_ref()
                                .map(|s| format!("Welcome, {}!", s.username))
                                .unwrap_or_default(),
                            #[watch]
                            set_visible: model.state.session.is_some(),
                        },

                        gtk4::Button {
                            set_label: "Login",
                            add_css_class: "suggested-action",
                            #[watch]
                            set_visible: model.state.session.is_none(),
                            connect_clicked => AppInput::OpenLogin,
                        },

                        gtk4::Button {
                            set_label: "Sign Up",
                            #[watch]
                            set_visible: model.state.session.is_none(),
                            connect_clicked => AppInput::OpenSignup,
                        },

                        gtk4::Button {
                            set_label: "Logout",
                            add_css_class: "destructive-action",
                            #[watch]
                            set_visible: model.state.session.is_some(),
                            connect_clicked => AppInput::Logout,
                        },
                    },
                },

                // Error banner. One slot, last write wins; a success never
                // clears it.
                gtk4::Label {
                    add_css_class: "error-banner",
                    set_margin_start: 16,
                    set_margin_end: 16,
                    set_margin_bottom: 8,
                    set_wrap: true,
                    #[watch]
                    set_visible: model.state.error.is_some(),
                    #[watch]
                    set_label: model.state.error.as_deref().unwrap_or(""),
                },

                gtk4::Separator {
                    set_orientation: gtk4::Orientation::Horizontal,
                },

                // Dashboard, shown once a session exists
                gtk4::Box {
                    set_orientation: gtk4::Orientation::Vertical,
                    set_margin_all: 16,
                    set_vexpand: true,
                    #[watch]
                    set_visible: model.state.session.is_some(),

                    model.dashboard.widget().clone() {},
                },

                gtk4::Label {
                    set_text: "Log in to view the hardware inventory.",
                    set_vexpand: true,
                    add_css_class: "dim-label",
                    #[watch]
                    set_visible: model.state.session.is_none(),
                },
            },
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let api = ApiClient::new(&config.api_url);

        // Initialize child components
        let auth_form = AuthForm::builder()
            .launch(())
            .forward(sender.input_sender(), |output| match output {
                AuthFormOutput::Submitted {
                    username,
                    password,
                    email,
                    is_admin,
                    is_user,
                } => AppInput::Authenticate {
                    username,
                    password,
                    email,
                    is_admin,
                    is_user,
                },
                AuthFormOutput::Cancelled => AppInput::AuthCancelled,
            });

        let add_item_form = AddItemForm::builder()
            .launch(())
            .forward(sender.input_sender(), |output| match output {
                AddItemFormOutput::Submitted(item) => AppInput::AddItem(item),
                AddItemFormOutput::Cancelled => AppInput::AddFormCancelled,
            });

        let dashboard = Dashboard::builder()
            .launch(())
            .forward(sender.input_sender(), |output| match output {
                DashboardOutput::AddItemRequested => AppInput::OpenAddForm,
                DashboardOutput::DeleteItem(id) => AppInput::DeleteItem(id),
            });

        let model = App {
            state: AppState::new(),
            api,
            auth_form,
            add_item_form,
            dashboard,
        };

        // Auto-login in dev mode
        #[cfg(debug_assertions)]
        {
            // Load .env.dev if it exists
            let _ = dotenvy::from_filename(".env.dev");

            if let (Ok(username), Ok(password)) = (
                std::env::var("STOCKRS_USERNAME"),
                std::env::var("STOCKRS_PASSWORD"),
            ) {
                tracing::info!("Found dev credentials in env, attempting auto-login");
                sender.input(AppInput::Authenticate {
                    username,
                    password,
                    email: None,
                    is_admin: false,
                    is_user: true,
                });
            }
        }

        let widgets = view_output!();

        // Load CSS
        let provider = gtk4::CssProvider::new();
        provider.load_from_data(include_str!("style.css"));

        if let Some(display) = gtk4::gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        // Connect dialogs to main window
        model.auth_form.widget().set_transient_for(Some(&widgets.main_window));
        model.add_item_form.widget().set_transient_for(Some(&widgets.main_window));

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            AppInput::OpenLogin => {
                self.state.apply(Action::OpenAuth { signup: false });
                self.auth_form.emit(AuthFormInput::Open { signup: false });
            }
            AppInput::OpenSignup => {
                self.state.apply(Action::OpenAuth { signup: true });
                self.auth_form.emit(AuthFormInput::Open { signup: true });
            }
            AppInput::AuthCancelled => {
                self.state.apply(Action::CloseAuth);
            }
            AppInput::Authenticate {
                username,
                password,
                email,
                is_admin,
                is_user,
            } => {
                let signup = self.state.signup_mode;
                let request = AuthRequest {
                    username,
                    password,
                    is_admin,
                    is_user,
                    email,
                };

                let api = self.api.clone();
                let sender_clone = sender.clone();
                std::thread::spawn(move || {
                    let result = if signup {
                        api.signup(&request)
                    } else {
                        api.login(&request)
                    };
                    sender_clone.input(AppInput::AuthFinished(result));
                });
            }
            AppInput::AuthFinished(result) => match result {
                Ok(session) => {
                    let is_admin = session.is_admin;
                    self.state.apply(Action::SessionEstablished(session));
                    self.auth_form.emit(AuthFormInput::Succeeded);
                    self.dashboard.emit(DashboardInput::SetAdmin(is_admin));
                    sender.input(AppInput::FetchItems);
                }
                Err(e) => {
                    tracing::warn!("Authentication failed: {}", e);
                    self.state.apply(Action::AuthFailed);
                    self.auth_form
                        .emit(AuthFormInput::Failed(store::AUTH_ERROR.to_string()));
                }
            },
            AppInput::Logout => {
                if let Some(session) = &self.state.session {
                    let token = session.token.clone();
                    let api = self.api.clone();
                    let sender_clone = sender.clone();
                    std::thread::spawn(move || {
                        let result = api.logout(&token);
                        sender_clone.input(AppInput::LogoutFinished(result));
                    });
                }
            }
            AppInput::LogoutFinished(result) => match result {
                Ok(()) => {
                    self.state.apply(Action::LoggedOut);
                    self.dashboard.emit(DashboardInput::SetAdmin(false));
                    self.refresh_dashboard();
                }
                Err(e) => {
                    // The session stays valid; the backend did not
                    // invalidate the token.
                    tracing::warn!("Logout failed: {}", e);
                    self.state.apply(Action::LogoutFailed);
                }
            },
            AppInput::FetchItems => {
                if let Some(session) = &self.state.session {
                    let generation = self.state.begin_fetch();
                    let token = session.token.clone();
                    let api = self.api.clone();
                    let sender_clone = sender.clone();
                    std::thread::spawn(move || {
                        let result = api.list_items(&token);
                        sender_clone.input(AppInput::FetchFinished { generation, result });
                    });
                }
            }
            AppInput::FetchFinished { generation, result } => match result {
                Ok(items) => {
                    tracing::info!(count = items.len(), "fetched inventory items");
                    self.state.apply(Action::ItemsLoaded { generation, items });
                    self.refresh_dashboard();
                }
                Err(e) => {
                    tracing::error!("Error fetching inventory items: {}", e);
                    self.state.apply(Action::FetchFailed);
                }
            },
            AppInput::OpenAddForm => {
                self.state.apply(Action::OpenAddForm);
                self.add_item_form.emit(AddItemFormInput::Open);
            }
            AppInput::AddFormCancelled => {
                self.state.apply(Action::CloseAddForm);
            }
            AppInput::AddItem(item) => {
                if let Some(session) = &self.state.session {
                    let token = session.token.clone();
                    let api = self.api.clone();
                    let sender_clone = sender.clone();
                    std::thread::spawn(move || {
                        let result = api.create_item(&token, &item);
                        sender_clone.input(AppInput::AddFinished(result));
                    });
                }
            }
            AppInput::AddFinished(result) => match result {
                Ok(item) => {
                    tracing::info!(id = item.id, name = %item.name, "item created");
                    self.state.apply(Action::ItemAdded(item));
                    self.add_item_form.emit(AddItemFormInput::Succeeded);
                    self.refresh_dashboard();
                }
                Err(e) => {
                    // The form stays open so the entered values survive.
                    tracing::error!("Error adding item: {}", e);
                    self.state.apply(Action::AddFailed);
                }
            },
            AppInput::DeleteItem(id) => {
                if !self.state.can_delete() {
                    tracing::warn!(id, "ignoring delete request without an admin session");
                } else if let Some(session) = &self.state.session {
                    let token = session.token.clone();
                    let api = self.api.clone();
                    let sender_clone = sender.clone();
                    std::thread::spawn(move || {
                        let result = api.delete_item(&token, id);
                        sender_clone.input(AppInput::DeleteFinished { id, result });
                    });
                }
            }
            AppInput::DeleteFinished { id, result } => match result {
                Ok(()) => {
                    tracing::info!(id, "item deleted");
                    self.state.apply(Action::ItemDeleted(id));
                    self.refresh_dashboard();
                }
                Err(e) => {
                    tracing::error!("Error deleting item {}: {}", id, e);
                    self.state.apply(Action::DeleteFailed);
                }
            },
            AppInput::SearchChanged(text) => {
                self.state.apply(Action::SearchChanged(text));
                self.refresh_dashboard();
            }
        }

        // IMPORTANT: Must call update_view to trigger #[watch] updates when using update_with_view
        self.update_view(widgets, sender);
    }
}

impl App {
    /// Push the current (search-filtered) collection into the dashboard.
    fn refresh_dashboard(&self) {
        let items: Vec<InventoryItem> = self.state.visible_items().into_iter().cloned().collect();
        self.dashboard.emit(DashboardInput::SetItems(items));
    }
}
