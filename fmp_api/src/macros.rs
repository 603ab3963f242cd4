/// Declares a response record together with its field table.
///
/// Each field is written as `pub name: Type => "wireName"`. `Type` must be
/// one of `String`, `i64`, `f64`, `bool` or an `Option` of those; an `Option`
/// marks the field as nullable and not required. The macro emits the struct,
/// a static [`Schema`](crate::schema::Schema) describing every field, and a
/// [`Record`](crate::schema::Record) impl that decodes through that table.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty => $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::schema::Record for $name {
            fn schema() -> &'static $crate::schema::Schema {
                static SCHEMA: $crate::schema::Schema = $crate::schema::Schema {
                    entity: stringify!($name),
                    fields: &[
                        $(
                            $crate::schema::FieldSpec {
                                canonical: stringify!($field),
                                wire: $wire,
                                kind: <$ty as $crate::schema::FieldValue>::KIND,
                                required: <$ty as $crate::schema::FieldValue>::REQUIRED,
                            },
                        )*
                    ],
                };
                &SCHEMA
            }

            fn from_object(
                object: &::serde_json::Map<::std::string::String, ::serde_json::Value>,
            ) -> ::std::result::Result<Self, $crate::SchemaValidationError> {
                let reader = $crate::schema::FieldReader::new(stringify!($name), object);
                Ok(Self {
                    $(
                        $field: reader.read(stringify!($field), $wire)?,
                    )*
                })
            }
        }
    };
}
