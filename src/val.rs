//! Dynamically typed values passed through dispatch.
//!
//! Operations are looked up by name at runtime, so their arguments and results
//! cannot be statically typed. [`Val`] covers plain data; anything else a host
//! wants to hand between plugins travels as an [`Opaque`] payload.

use std::any::Any ;
use std::sync::Arc ;



/// A value passed to or returned from a plugin operation.
///
/// A handler answering "nothing" returns `Ok( None )` rather than a `Val`, which
/// is what [`Core::call_success`]( crate::Core::call_success ) keys on.
#[derive( Debug, Clone, PartialEq )]
pub enum Val {
    Bool( bool ),
    S64( i64 ),
    U64( u64 ),
    Float64( f64 ),
    Char( char ),
    String( String ),
    Bytes( Vec<u8> ),
    List( Vec<Val> ),
    /// Named fields, in declaration order.
    Record( Vec<( String, Val )> ),
    /// Host-defined payload, compared by identity.
    Opaque( Opaque ),
}

impl Val {

    /// Wraps an arbitrary value as an [`Opaque`] payload.
    pub fn opaque<T: Any + Send + Sync>( value: T ) -> Self {
        Self::Opaque( Opaque( Arc::new( value )))
    }

    pub fn as_bool( &self ) -> Option<bool> {
        match self { Self::Bool( value ) => Some( *value ), _ => None }
    }

    pub fn as_s64( &self ) -> Option<i64> {
        match self { Self::S64( value ) => Some( *value ), _ => None }
    }

    pub fn as_u64( &self ) -> Option<u64> {
        match self { Self::U64( value ) => Some( *value ), _ => None }
    }

    pub fn as_f64( &self ) -> Option<f64> {
        match self { Self::Float64( value ) => Some( *value ), _ => None }
    }

    pub fn as_str( &self ) -> Option<&str> {
        match self { Self::String( value ) => Some( value ), _ => None }
    }

    pub fn as_bytes( &self ) -> Option<&[u8]> {
        match self { Self::Bytes( value ) => Some( value ), _ => None }
    }

    pub fn as_list( &self ) -> Option<&[Val]> {
        match self { Self::List( items ) => Some( items ), _ => None }
    }

    /// Looks up a field of a [`Val::Record`] by name.
    pub fn field( &self, name: &str ) -> Option<&Val> {
        match self {
            Self::Record( fields ) => fields.iter().find(|( field, _ )| field == name ).map(|( _, value )| value ),
            _ => None,
        }
    }

    /// Borrows the payload of a [`Val::Opaque`] if it holds a `T`.
    pub fn downcast_ref<T: Any>( &self ) -> Option<&T> {
        match self { Self::Opaque( opaque ) => opaque.downcast_ref(), _ => None }
    }

}

/// Type-erased payload carried by [`Val::Opaque`].
#[derive( Clone )]
pub struct Opaque( Arc<dyn Any + Send + Sync> );

impl Opaque {
    pub fn downcast_ref<T: Any>( &self ) -> Option<&T> { self.0.downcast_ref() }
}

impl PartialEq for Opaque {
    fn eq( &self, other: &Self ) -> bool { Arc::ptr_eq( &self.0, &other.0 ) }
}

impl std::fmt::Debug for Opaque {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result { f.write_str( "<opaque>" ) }
}

impl From<bool> for Val {
    fn from( value: bool ) -> Self { Self::Bool( value ) }
}

impl From<i32> for Val {
    fn from( value: i32 ) -> Self { Self::S64( value.into() ) }
}

impl From<i64> for Val {
    fn from( value: i64 ) -> Self { Self::S64( value ) }
}

impl From<u32> for Val {
    fn from( value: u32 ) -> Self { Self::U64( value.into() ) }
}

impl From<u64> for Val {
    fn from( value: u64 ) -> Self { Self::U64( value ) }
}

impl From<f64> for Val {
    fn from( value: f64 ) -> Self { Self::Float64( value ) }
}

impl From<char> for Val {
    fn from( value: char ) -> Self { Self::Char( value ) }
}

impl From<&str> for Val {
    fn from( value: &str ) -> Self { Self::String( value.to_string() ) }
}

impl From<String> for Val {
    fn from( value: String ) -> Self { Self::String( value ) }
}

impl From<Vec<u8>> for Val {
    fn from( value: Vec<u8> ) -> Self { Self::Bytes( value ) }
}

impl From<Vec<Val>> for Val {
    fn from( items: Vec<Val> ) -> Self { Self::List( items ) }
}

impl From<crate::PluginId> for Val {
    fn from( id: crate::PluginId ) -> Self { Self::String( id.as_str().to_string() ) }
}
