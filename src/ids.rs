//! Identifier newtypes.
//!
//! Plugins and capabilities are both named by opaque strings. Wrapping them keeps
//! the two namespaces apart in signatures while still allowing `&str` lookups
//! through [`Borrow`].

use std::borrow::Borrow ;



/// Unique identifier of a plugin, the name it is loaded by.
#[derive( Eq, Hash, PartialEq, PartialOrd, Ord, Debug, Clone )]
pub struct PluginId( String );

impl PluginId {
    /// Wraps a plugin name.
    pub fn new( id: impl Into<String> ) -> Self { Self( id.into() ) }

    /// The plugin name as a string slice.
    #[inline] pub fn as_str( &self ) -> &str { &self.0 }
}

impl std::fmt::Display for PluginId {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt( &self.0, f )
    }
}

impl From<&str> for PluginId {
    fn from( id: &str ) -> Self { Self( id.to_string() ) }
}

impl From<String> for PluginId {
    fn from( id: String ) -> Self { Self( id ) }
}

impl From<&PluginId> for PluginId {
    fn from( id: &PluginId ) -> Self { id.clone() }
}

impl Borrow<str> for PluginId {
    fn borrow( &self ) -> &str { &self.0 }
}

impl AsRef<str> for PluginId {
    fn as_ref( &self ) -> &str { &self.0 }
}

impl PartialEq<str> for PluginId {
    fn eq( &self, other: &str ) -> bool { self.0 == other }
}

impl PartialEq<&str> for PluginId {
    fn eq( &self, other: &&str ) -> bool { self.0 == *other }
}

/// Name of an abstract capability (an "interface") that plugins may implement
/// and that other plugins may depend on without naming a concrete provider.
#[derive( Eq, Hash, PartialEq, PartialOrd, Ord, Debug, Clone )]
pub struct CapabilityId( String );

impl CapabilityId {
    /// Wraps a capability name.
    pub fn new( id: impl Into<String> ) -> Self { Self( id.into() ) }

    /// The capability name as a string slice.
    #[inline] pub fn as_str( &self ) -> &str { &self.0 }
}

impl std::fmt::Display for CapabilityId {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt( &self.0, f )
    }
}

impl From<&str> for CapabilityId {
    fn from( id: &str ) -> Self { Self( id.to_string() ) }
}

impl From<String> for CapabilityId {
    fn from( id: String ) -> Self { Self( id ) }
}

impl Borrow<str> for CapabilityId {
    fn borrow( &self ) -> &str { &self.0 }
}

impl AsRef<str> for CapabilityId {
    fn as_ref( &self ) -> &str { &self.0 }
}

impl PartialEq<str> for CapabilityId {
    fn eq( &self, other: &str ) -> bool { self.0 == other }
}

impl PartialEq<&str> for CapabilityId {
    fn eq( &self, other: &&str ) -> bool { self.0 == *other }
}
