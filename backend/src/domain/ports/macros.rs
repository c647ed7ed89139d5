//! `define_port_error!`: declares a port error enum with `thiserror`
//! messages and snake_case constructors taking `impl Into<_>` fields.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum StoreFaultError {
            Unreachable { message: String } => "store unreachable: {message}",
            Busy { retries: u32 } => "store busy after {retries} retries",
            Rejected { table: String, rows: u32 } => "{table} rejected {rows} rows",
            Closed => "store closed",
        }
    }

    #[rstest]
    fn string_fields_accept_str() {
        let err = StoreFaultError::unreachable("connection refused");
        assert_eq!(err.to_string(), "store unreachable: connection refused");
    }

    #[rstest]
    fn non_string_fields_keep_their_type() {
        assert_eq!(
            StoreFaultError::busy(3_u32).to_string(),
            "store busy after 3 retries"
        );
    }

    #[rstest]
    fn mixed_and_unit_variants() {
        assert_eq!(
            StoreFaultError::rejected("talks", 2_u32).to_string(),
            "talks rejected 2 rows"
        );
        assert_eq!(StoreFaultError::closed(), StoreFaultError::Closed);
    }
}
