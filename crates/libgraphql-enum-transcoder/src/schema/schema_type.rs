use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

/// A named type defined within a [`Schema`](crate::schema::Schema).
///
/// Wrapper types (lists and non-null) never appear here; they are expressed by
/// the [`TypeAnnotation`]s that reference a [`SchemaType`] by name.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(ObjectOrInterfaceType),
    Object(ObjectOrInterfaceType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl SchemaType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name.as_str(),
            Self::InputObject(t) => t.name.as_str(),
            Self::Interface(t) | Self::Object(t) => t.name.as_str(),
            Self::Scalar(t) => t.name.as_str(),
            Self::Union(t) => t.name.as_str(),
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(input_type) = self {
            Some(input_type)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectOrInterfaceType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    /// Indicates whether values of this type may appear in variables (enums,
    /// scalars, and input objects).
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input object",
            Self::Interface(_) => "interface",
            Self::Object(_) => "object",
            Self::Scalar(_) => "scalar",
            Self::Union(_) => "union",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, TypeAnnotation>,
    pub(crate) name: String,
}
impl InputObjectType {
    /// Map of input field name to the field's declared type.
    pub fn fields(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectOrInterfaceType {
    pub(crate) fields: IndexMap<String, TypeAnnotation>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceType {
    /// Map of field name to the field's declared output type.
    pub fn fields(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.fields
    }

    pub fn interfaces(&self) -> &[String] {
        self.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) name: String,
}
impl ScalarType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn members(&self) -> &[String] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
