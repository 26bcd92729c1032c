use serde::{Deserialize, Serialize};

/// An attribute attached to a controller type or one of its methods.
///
/// The routing kinds carry their template text; `None` models an attribute
/// written without a template (`#[http_get]`). Anything else is kept as
/// [`Attribute::Other`] so registries can describe the full surface without
/// affecting route resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Route(Option<String>),
    HttpGet(Option<String>),
    HttpPost(Option<String>),
    HttpPut(Option<String>),
    HttpDelete(Option<String>),
    Other(String),
}

/// Routing vocabulary recognized by the discovery engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Route,
    Get,
    Post,
    Put,
    Delete,
}

impl Attribute {
    /// Routing kind of this attribute, `None` for unrecognized attributes.
    pub fn kind(&self) -> Option<AttributeKind> {
        match self {
            Attribute::Route(_) => Some(AttributeKind::Route),
            Attribute::HttpGet(_) => Some(AttributeKind::Get),
            Attribute::HttpPost(_) => Some(AttributeKind::Post),
            Attribute::HttpPut(_) => Some(AttributeKind::Put),
            Attribute::HttpDelete(_) => Some(AttributeKind::Delete),
            Attribute::Other(_) => None,
        }
    }

    /// Template text, if the attribute is a routing attribute that has one.
    pub fn template(&self) -> Option<&str> {
        match self {
            Attribute::Route(t)
            | Attribute::HttpGet(t)
            | Attribute::HttpPost(t)
            | Attribute::HttpPut(t)
            | Attribute::HttpDelete(t) => t.as_deref(),
            Attribute::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Receiver {
    /// Takes `self` in some form.
    #[default]
    Instance,
    /// Associated function without a receiver.
    Static,
}

/// A method as seen by the registry.
///
/// `declaring_type` is the full name of the type the method is written on.
/// A method surfaced on a type but declared elsewhere (delegated or
/// inherited from a base) keeps the base's full name here and is not an
/// action of the surfacing type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub declaring_type: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub receiver: Receiver,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, declaring_type: impl Into<String>) -> Self {
        MethodDescriptor {
            name: name.into(),
            declaring_type: declaring_type.into(),
            params: Vec::new(),
            attributes: Vec::new(),
            visibility: Visibility::Public,
            receiver: Receiver::Instance,
        }
    }

    pub fn with_param(mut self, type_name: impl Into<String>) -> Self {
        self.params.push(type_name.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    /// Whether this method is an action of `owner`: public, instance and
    /// declared directly on it.
    pub fn is_action_of(&self, owner: &TypeDescriptor) -> bool {
        self.visibility == Visibility::Public
            && self.receiver == Receiver::Instance
            && self.declaring_type == owner.full_name
    }
}

/// A type as seen by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Short type name, e.g. `UserController`.
    pub name: String,
    /// Fully qualified name used in signature keys.
    pub full_name: String,
    /// Tagged as hosting HTTP actions.
    #[serde(default)]
    pub controller: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    /// Descriptor for a type tagged as an HTTP controller.
    pub fn controller(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            full_name: full_name.into(),
            controller: true,
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Descriptor for any other type.
    pub fn plain(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        TypeDescriptor {
            controller: false,
            ..TypeDescriptor::controller(name, full_name)
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Directly declared public instance methods, in registry order.
    pub fn actions(&self) -> impl Iterator<Item = &MethodDescriptor> + '_ {
        self.methods.iter().filter(move |m| m.is_action_of(self))
    }
}
