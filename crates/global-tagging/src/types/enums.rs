/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Kind of tag an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    #[default]
    User,
    Service,
    Access,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::User => "user",
            TagType::Service => "service",
            TagType::Access => "access",
        }
    }
}

/// Backend holding the tags (GhoST for resources, IMS for classic infrastructure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Ghost,
    Ims,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Ghost => "ghost",
            Provider::Ims => "ims",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderByName {
    Asc,
    Desc,
}

impl OrderByName {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderByName::Asc => "asc",
            OrderByName::Desc => "desc",
        }
    }
}

/// Direction of a resource tagging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagResources {
    Attach,
    Detach,
}

macro_rules! impl_from_str {
    ($ty:ty, $($text:literal => $variant:expr),+ $(,)?) => {
        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    other => Err(format!("unknown {} value: {other}", stringify!($ty))),
                }
            }
        }
    };
}

impl_from_str!(TagType, "user" => TagType::User, "service" => TagType::Service, "access" => TagType::Access);
impl_from_str!(Provider, "ghost" => Provider::Ghost, "ims" => Provider::Ims);
impl_from_str!(OrderByName, "asc" => OrderByName::Asc, "desc" => OrderByName::Desc);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(serde_json::to_string(&TagType::Access).unwrap(), r#""access""#);
        assert_eq!(serde_json::to_string(&Provider::Ims).unwrap(), r#""ims""#);
        assert_eq!(
            serde_json::from_str::<OrderByName>(r#""desc""#).unwrap(),
            OrderByName::Desc
        );
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("Service".parse::<TagType>(), Ok(TagType::Service));
        assert_eq!("ghost".parse::<Provider>(), Ok(Provider::Ghost));
        assert!("sideways".parse::<OrderByName>().is_err());
    }
}
