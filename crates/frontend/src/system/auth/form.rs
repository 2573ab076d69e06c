//! Login / registration form model.
//!
//! Each [`AuthMode`] carries its own field schema. Fields are validated
//! against the schema's rule table; the first failing rule wins and its
//! message is shown once the field has been touched.

use contracts::system::auth::{LoginRequest, RegisterRequest};
use contracts::system::users::Role;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Role,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Role => "role",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLen(usize),
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => EMAIL_RE.is_match(value),
            Rule::MinLen(min) => value.chars().count() >= *min,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub field: Field,
    pub rules: &'static [FieldRule],
}

const REQUIRED: FieldRule = FieldRule {
    rule: Rule::Required,
    message: "Required",
};
const EMAIL: FieldRule = FieldRule {
    rule: Rule::Email,
    message: "Not valid",
};
const PASSWORD_MIN: FieldRule = FieldRule {
    rule: Rule::MinLen(5),
    message: "Password must be at least 5 characters long",
};

const LOGIN_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        field: Field::Email,
        rules: &[REQUIRED, EMAIL],
    },
    FieldSchema {
        field: Field::Password,
        rules: &[REQUIRED],
    },
    FieldSchema {
        field: Field::Role,
        rules: &[REQUIRED],
    },
];

const REGISTER_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        field: Field::Name,
        rules: &[REQUIRED],
    },
    FieldSchema {
        field: Field::Email,
        rules: &[REQUIRED, EMAIL],
    },
    FieldSchema {
        field: Field::Password,
        rules: &[REQUIRED, PASSWORD_MIN],
    },
    FieldSchema {
        field: Field::Role,
        rules: &[REQUIRED],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn schema(&self) -> &'static [FieldSchema] {
        match self {
            AuthMode::Login => LOGIN_SCHEMA,
            AuthMode::Register => REGISTER_SCHEMA,
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.schema().iter().any(|s| s.field == field)
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Not a user, go to register",
            AuthMode::Register => "Already a user, go to login",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl CredentialsDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Role => self.role.as_ref().map(Role::as_str).unwrap_or(""),
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// A validated draft, ready to send.
#[derive(Debug, Clone)]
pub enum Submission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: AuthMode,
    pub draft: CredentialsDraft,
    pub touched: BTreeSet<Field>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(AuthMode::Login)
    }
}

impl FormState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            draft: CredentialsDraft::default(),
            touched: BTreeSet::new(),
        }
    }

    /// Store a typed value. Role values other than `user`/`admin` are
    /// rejected and leave the draft unchanged.
    pub fn set_value(&mut self, field: Field, value: String) -> bool {
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Password => self.draft.password = value,
            Field::Role => match Role::parse(&value) {
                Some(role) => self.draft.role = Some(role),
                None => {
                    log::error!("Invalid role selected");
                    return false;
                }
            },
        }
        true
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn errors(&self) -> FieldErrors {
        self.mode
            .schema()
            .iter()
            .filter_map(|schema| {
                let value = self.draft.value(schema.field);
                schema
                    .rules
                    .iter()
                    .find(|r| !r.rule.check(value))
                    .map(|r| (schema.field, r.message))
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Error text for a field, only once it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors().get(&field).copied()
    }

    /// Clear the draft, keeping the mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn switch_mode(&mut self) {
        *self = Self::new(self.mode.toggled());
    }

    /// Touch every field of the current mode and build the request if the
    /// draft is valid.
    pub fn prepare_submission(&mut self) -> Option<Submission> {
        let fields: Vec<Field> = self.mode.schema().iter().map(|s| s.field).collect();
        self.touched.extend(fields);

        if !self.is_valid() {
            return None;
        }
        let role = self.draft.role?;
        let draft = self.draft.clone();
        Some(match self.mode {
            AuthMode::Login => Submission::Login(LoginRequest {
                email: draft.email,
                password: draft.password,
                role,
            }),
            AuthMode::Register => Submission::Register(RegisterRequest {
                name: draft.name,
                email: draft.email,
                password: draft.password,
                role,
            }),
        })
    }
}
