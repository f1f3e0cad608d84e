use std::any::Any ;
use std::sync::Arc ;

use crate::{ CapabilityId, Dependencies, Plugin, PluginId, Priority };



/// A loaded plugin instance together with what it declared at load time.
///
/// Descriptors are owned by the [`Core`]( crate::Core ) and only ever handed
/// out by reference.
pub struct PluginDescriptor {
    pub(crate) id: PluginId,
    pub(crate) instance: Arc<dyn Plugin>,
    pub(crate) any: Arc<dyn Any + Send + Sync>,
    pub(crate) priority: Priority,
    pub(crate) capabilities: Vec<CapabilityId>,
    pub(crate) dependencies: Dependencies,
    pub(crate) load_index: usize,
    pub(crate) explicit: bool,
    pub(crate) initialised: bool,
}

impl PluginDescriptor {

    #[inline] pub fn id( &self ) -> &PluginId { &self.id }

    /// The plugin object.
    #[inline] pub fn instance( &self ) -> &dyn Plugin { self.instance.as_ref() }

    #[inline] pub fn priority( &self ) -> Priority { self.priority }

    /// Capabilities declared at load time.
    #[inline] pub fn capabilities( &self ) -> &[CapabilityId] { &self.capabilities }

    /// Dependencies declared at load time.
    #[inline] pub fn dependencies( &self ) -> &Dependencies { &self.dependencies }

    /// Position in load order, starting at 0.
    #[inline] pub fn load_index( &self ) -> usize { self.load_index }

    /// Whether the host asked for this plugin by name.
    #[inline] pub fn is_explicit( &self ) -> bool { self.explicit }

    #[inline] pub fn is_initialised( &self ) -> bool { self.initialised }

    pub fn implements( &self, capability: &str ) -> bool {
        self.capabilities.iter().any(| c | c.as_str() == capability )
    }

    /// The plugin as its concrete type, if it is a `T`.
    pub fn downcast<T: Plugin>( &self ) -> Option<Arc<T>> {
        Arc::clone( &self.any ).downcast::<T>().ok()
    }

}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "PluginDescriptor" )
            .field( "id", &self.id )
            .field( "instance", &"<plugin>" )
            .field( "priority", &self.priority )
            .field( "capabilities", &self.capabilities )
            .field( "dependencies", &self.dependencies )
            .field( "load_index", &self.load_index )
            .field( "explicit", &self.explicit )
            .field( "initialised", &self.initialised )
            .finish()
    }
}
