/// A SQL parameter value in a driver-agnostic form.
///
/// The query builder treats these as opaque; each driver converts them to
/// its native encoding when binding `$n` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    Int32(i32),
    Int64(i64),
    Bool(bool),
}

macro_rules! impl_from {
    ($ty:ty => $variant:ident) => {
        impl From<$ty> for SqlValue {
            fn from(value: $ty) -> Self {
                SqlValue::$variant(value.into())
            }
        }
    };
}

impl_from!(&str => Text);
impl_from!(String => Text);
impl_from!(i32 => Int32);
impl_from!(i64 => Int64);
impl_from!(bool => Bool);

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
