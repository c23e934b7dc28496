//! Login/signup dialog component.

use gtk4::prelude::*;
use relm4::prelude::*;
use stockrs_core::RoleSelection;

/// Messages for the auth dialog.
#[derive(Debug)]
pub enum AuthFormInput {
    /// Open the dialog in login or signup mode.
    Open { signup: bool },
    /// Username changed.
    UsernameChanged(String),
    /// Password changed.
    PasswordChanged(String),
    /// Email changed (signup only).
    EmailChanged(String),
    /// Admin checkbox toggled.
    AdminToggled(bool),
    /// User checkbox toggled.
    UserToggled(bool),
    /// Submit the credentials.
    Submit,
    /// Cancel and close.
    Cancel,
    /// The submission settled successfully; reset and close.
    Succeeded,
    /// The submission failed; show the error and re-enable, keeping the
    /// entered values.
    Failed(String),
}

/// Output messages from the auth dialog.
#[derive(Debug, Clone)]
pub enum AuthFormOutput {
    /// Credentials submitted. `email` is present only in signup mode.
    Submitted {
        username: String,
        password: String,
        email: Option<String>,
        is_admin: bool,
        is_user: bool,
    },
    /// Dialog was cancelled.
    Cancelled,
}

/// Auth dialog model.
pub struct AuthForm {
    username: String,
    password: String,
    email: String,
    role: RoleSelection,
    signup_mode: bool,
    visible: bool,
    busy: bool,
    error: Option<String>,
}

impl AuthForm {
    fn title(&self) -> &'static str {
        if self.signup_mode {
            "Sign Up"
        } else {
            "Log In"
        }
    }

    /// Mirror of native required-field validation: submission is allowed
    /// only when every required field is non-empty.
    fn can_submit(&self) -> bool {
        !self.busy
            && !self.username.is_empty()
            && !self.password.is_empty()
            && (!self.signup_mode || !self.email.is_empty())
    }
}

#[relm4::component(pub)]
impl Component for AuthForm {
    type Init = ();
    type Input = AuthFormInput;
    type Output = AuthFormOutput;
    type CommandOutput = ();

    view! {
        #[name = "dialog"]
        gtk4::Window {
            set_modal: true,
            set_default_width: 380,
            #[watch]
            set_title: Some(model.title()),
            #[watch]
            set_visible: model.visible,

            connect_close_request[sender] => move |_| {
                sender.input(AuthFormInput::Cancel);
                gtk4::glib::Propagation::Stop
            },

            gtk4::Box {
                set_orientation: gtk4::Orientation::Vertical,
                set_spacing: 0,

                gtk4::HeaderBar {
                    set_show_title_buttons: false,

                    #[wrap(Some)]
                    set_title_widget = &gtk4::Label {
                        #[watch]
                        set_text: model.title(),
                        add_css_class: "title",
                    },

                    pack_start = &gtk4::Button {
                        set_label: "Cancel",
                        connect_clicked => AuthFormInput::Cancel,
                    },

                    pack_end = &gtk4::Button {
                        add_css_class: "suggested-action",
                        #[watch]
                        set_label: if model.busy { "Processing..." } else { model.title() },
                        #[watch]
                        set_sensitive: model.can_submit(),
                        connect_clicked => AuthFormInput::Submit,
                    },
                },

                gtk4::Box {
                    set_orientation: gtk4::Orientation::Vertical,
                    set_spacing: 16,
                    set_margin_all: 24,

                    gtk4::Label {
                        add_css_class: "error-text",
                        set_halign: gtk4::Align::Start,
                        set_wrap: true,
                        #[watch]
                        set_visible: model.error.is_some(),
                        #[watch]
                        set_label: model.error.as_deref().unwrap_or(""),
                    },

                    // Username field
                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Vertical,
                        set_spacing: 4,

                        gtk4::Label {
                            set_text: "Username",
                            set_halign: gtk4::Align::Start,
                            add_css_class: "dim-label",
                        },

                        #[name = "username_entry"]
                        gtk4::Entry {
                            set_placeholder_text: Some("Username"),
                            connect_changed[sender] => move |entry| {
                                sender.input(AuthFormInput::UsernameChanged(entry.text().to_string()));
                            },
                        },
                    },

                    // Email field (signup only)
                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Vertical,
                        set_spacing: 4,
                        #[watch]
                        set_visible: model.signup_mode,

                        gtk4::Label {
                            set_text: "Email",
                            set_halign: gtk4::Align::Start,
                            add_css_class: "dim-label",
                        },

                        #[name = "email_entry"]
                        gtk4::Entry {
                            set_placeholder_text: Some("you@example.com"),
                            set_input_purpose: gtk4::InputPurpose::Email,
                            connect_changed[sender] => move |entry| {
                                sender.input(AuthFormInput::EmailChanged(entry.text().to_string()));
                            },
                        },
                    },

                    // Password field
                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Vertical,
                        set_spacing: 4,

                        gtk4::Label {
                            set_text: "Password",
                            set_halign: gtk4::Align::Start,
                            add_css_class: "dim-label",
                        },

                        #[name = "password_entry"]
                        gtk4::PasswordEntry {
                            set_placeholder_text: Some("Password"),
                            set_show_peek_icon: true,
                            connect_changed[sender] => move |entry| {
                                sender.input(AuthFormInput::PasswordChanged(entry.text().to_string()));
                            },
                        },
                    },

                    // Mutually exclusive role checkboxes
                    gtk4::Box {
                        set_orientation: gtk4::Orientation::Vertical,
                        set_spacing: 8,

                        gtk4::CheckButton {
                            #[watch]
                            set_label: Some(if model.signup_mode { "Sign up as Admin" } else { "Log in as Admin" }),
                            #[watch]
                            set_active: model.role.is_admin(),
                            connect_toggled[sender] => move |check| {
                                sender.input(AuthFormInput::AdminToggled(check.is_active()));
                            },
                        },

                        gtk4::CheckButton {
                            #[watch]
                            set_label: Some(if model.signup_mode { "Sign up as User" } else { "Log in as User" }),
                            #[watch]
                            set_active: model.role.is_user(),
                            connect_toggled[sender] => move |check| {
                                sender.input(AuthFormInput::UserToggled(check.is_active()));
                            },
                        },
                    },
                },
            },
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = AuthForm {
            username: String::new(),
            password: String::new(),
            email: String::new(),
            role: RoleSelection::default(),
            signup_mode: false,
            visible: false,
            busy: false,
            error: None,
        };

        let widgets = view_output!();

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
            AuthFormInput::Open { signup } => {
                self.signup_mode = signup;
                self.visible = true;
                self.busy = false;
                self.error = None;
                widgets.dialog.present();
            }
            AuthFormInput::UsernameChanged(username) => {
                self.username = username;
            }
            AuthFormInput::PasswordChanged(password) => {
                self.password = password;
            }
            AuthFormInput::EmailChanged(email) => {
                self.email = email;
            }
            AuthFormInput::AdminToggled(active) => {
                self.role.set_admin(active);
            }
            AuthFormInput::UserToggled(active) => {
                self.role.set_user(active);
            }
            AuthFormInput::Submit => {
                if !self.can_submit() {
                    return;
                }
                self.busy = true;
                self.error = None;
                let _ = sender.output(AuthFormOutput::Submitted {
                    username: self.username.clone(),
                    password: self.password.clone(),
                    email: if self.signup_mode {
                        Some(self.email.clone())
                    } else {
                        None
                    },
                    is_admin: self.role.is_admin(),
                    is_user: self.role.is_user(),
                });
            }
            AuthFormInput::Cancel => {
                self.visible = false;
                self.busy = false;
                widgets.dialog.set_visible(false);
                let _ = sender.output(AuthFormOutput::Cancelled);
            }
            AuthFormInput::Succeeded => {
                // Reset all fields for the next use.
                self.username.clear();
                self.password.clear();
                self.email.clear();
                self.role = RoleSelection::default();
                self.busy = false;
                self.error = None;
                self.visible = false;
                widgets.username_entry.set_text("");
                widgets.password_entry.set_text("");
                widgets.email_entry.set_text("");
                widgets.dialog.set_visible(false);
            }
            AuthFormInput::Failed(message) => {
                // Entered values are preserved so the user can retry.
                self.busy = false;
                self.error = Some(message);
            }
        }

        self.update_view(widgets, sender);
    }
}
