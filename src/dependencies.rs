//! Dependency declarations.
//!
//! A plugin depends either on a specific plugin by id, or on "some provider" of
//! a capability. Capability dependencies carry the default providers to load
//! when nothing loaded so far implements the capability.

use crate::{ CapabilityId, PluginId };



/// Everything a plugin needs loaded before it can be initialised.
///
/// ```
/// use plugin_link::Dependencies ;
///
/// let deps = Dependencies::new()
///     .plugin( "config" )
///     .capability( "fs", [ "local_fs" ]);
/// assert_eq!( deps.plugins().len(), 1 );
/// assert_eq!( deps.capabilities()[0].defaults()[0], "local_fs" );
/// ```
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct Dependencies {
    plugins: Vec<PluginId>,
    capabilities: Vec<CapabilityDependency>,
}

impl Dependencies {

    /// No dependencies.
    pub fn new() -> Self { Self::default() }

    /// Requires the plugin `id` to be loaded.
    pub fn plugin( mut self, id: impl Into<PluginId> ) -> Self {
        self.plugins.push( id.into() );
        self
    }

    /// Requires some provider of `capability`, loading `defaults` in order if
    /// none is loaded.
    pub fn capability(
        mut self,
        capability: impl Into<CapabilityId>,
        defaults: impl IntoIterator<Item = impl Into<PluginId>>,
    ) -> Self {
        self.capabilities.push( CapabilityDependency::new( capability, defaults ));
        self
    }

    /// Adds a fully specified capability dependency.
    pub fn with( mut self, dependency: CapabilityDependency ) -> Self {
        self.capabilities.push( dependency );
        self
    }

    /// Plugins required by id.
    #[inline] pub fn plugins( &self ) -> &[PluginId] { &self.plugins }

    /// Capabilities required from any provider.
    #[inline] pub fn capabilities( &self ) -> &[CapabilityDependency] { &self.capabilities }

    /// True when the plugin can be initialised without waiting on anything.
    pub fn is_empty( &self ) -> bool { self.plugins.is_empty() && self.capabilities.is_empty() }

}

/// A requirement for some provider of a capability.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct CapabilityDependency {
    capability: CapabilityId,
    defaults: Vec<PluginId>,
    expected_already_satisfied: bool,
}

impl CapabilityDependency {

    /// Requires `capability`, falling back on `defaults` in order.
    pub fn new(
        capability: impl Into<CapabilityId>,
        defaults: impl IntoIterator<Item = impl Into<PluginId>>,
    ) -> Self {
        Self {
            capability: capability.into(),
            defaults: defaults.into_iter().map( Into::into ).collect(),
            expected_already_satisfied: false,
        }
    }

    /// Marks the capability as one the declaring plugin expects to be provided
    /// already. Only affects diagnostics: resolution logs a warning when it
    /// has to fall back on the defaults.
    pub fn expected_already_satisfied( mut self ) -> Self {
        self.expected_already_satisfied = true ;
        self
    }

    #[inline] pub fn capability( &self ) -> &CapabilityId { &self.capability }

    /// Plugins loaded, in order, when no provider exists yet.
    #[inline] pub fn defaults( &self ) -> &[PluginId] { &self.defaults }

    #[inline] pub fn is_expected_already_satisfied( &self ) -> bool { self.expected_already_satisfied }

}
