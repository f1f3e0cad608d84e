//! Loaded plugins and the indices built from them.
//!
//! The [`Registry`] owns every [`PluginDescriptor`] and keeps the capability
//! index and the dispatch table consistent with them: registering a plugin
//! inserts its entries, dropping it retracts them.

mod ranked ;
mod capability_index ;
mod dispatch_table ;

use std::collections::{ HashMap, HashSet };
use itertools::Itertools ;
use tracing::debug ;

use crate::{ PluginCatalog, PluginDescriptor, PluginId, LoadError };
use crate::catalog::Constructed ;
use crate::plugin::Handler ;
use capability_index::CapabilityIndex ;
use dispatch_table::DispatchTable ;
pub(crate) use ranked::Ranked ;



#[derive( Default )]
pub(crate) struct Registry {
    descriptors: HashMap<PluginId, PluginDescriptor>,
    load_order: Vec<PluginId>,
    pending: Vec<PluginId>,
    dropped: HashSet<PluginId>,
    capabilities: CapabilityIndex,
    operations: DispatchTable,
    loads: usize,
}

impl Registry {

    /// Returns the descriptor for `id`, constructing and registering the plugin
    /// first if it isn't loaded yet.
    pub fn load(
        &mut self,
        catalog: &PluginCatalog,
        id: &PluginId,
        explicit: bool,
    ) -> Result<&PluginDescriptor, LoadError> {

        if let Some( descriptor ) = self.descriptors.get_mut( id ) {
            if explicit && !descriptor.explicit {
                debug!( plugin = %id, "promoting already loaded plugin to explicit" );
                descriptor.explicit = true ;
            }
        }
        if self.descriptors.contains_key( id ) { return Ok( &self.descriptors[id] )}

        let Constructed { instance, any, operations } = catalog.construct( id )?;

        let load_index = self.loads ;
        self.loads += 1 ;

        let priority = instance.priority();
        let capabilities = instance.implemented_capabilities().into_iter().unique().collect::<Vec<_>>();
        let dependencies = instance.dependencies();

        debug!(
            plugin = %id,
            %priority,
            explicit,
            capabilities = %capabilities.iter().join( ", " ),
            operations = operations.len(),
            "loaded plugin"
        );

        capabilities.iter().for_each(| capability | self.capabilities.insert(
            capability.clone(), id.clone(), priority, load_index,
        ));
        operations.into_iter().for_each(|( name, handler )| self.operations.insert(
            name, id.clone(), priority, load_index, handler,
        ));

        self.dropped.remove( id );
        self.load_order.push( id.clone() );
        self.pending.push( id.clone() );
        self.descriptors.insert( id.clone(), PluginDescriptor {
            id: id.clone(),
            instance,
            any,
            priority,
            capabilities,
            dependencies,
            load_index,
            explicit,
            initialised: false,
        });

        Ok( &self.descriptors[id] )

    }

    /// Unregisters `id` and retracts its capabilities and operations.
    pub fn remove( &mut self, id: &PluginId ) -> Option<PluginDescriptor> {
        let descriptor = self.descriptors.remove( id )?;
        debug_assert!( !descriptor.initialised, "only pending plugins are dropped" );
        self.capabilities.retract( id );
        self.operations.retract( id );
        self.load_order.retain(| loaded | loaded != id );
        self.pending.retain(| pending | pending != id );
        self.dropped.insert( id.clone() );
        Some( descriptor )
    }

    pub fn mark_initialised( &mut self, id: &PluginId ) {
        if let Some( descriptor ) = self.descriptors.get_mut( id ) {
            descriptor.initialised = true ;
        }
        self.pending.retain(| pending | pending != id );
    }

    #[inline] pub fn get( &self, id: &str ) -> Option<&PluginDescriptor> { self.descriptors.get( id ) }

    #[inline] pub fn contains( &self, id: &str ) -> bool { self.descriptors.contains_key( id ) }

    #[inline] pub fn is_dropped( &self, id: &str ) -> bool { self.dropped.contains( id ) }

    /// Loaded plugins that haven't been initialised, in load order.
    #[inline] pub fn pending( &self ) -> &[PluginId] { &self.pending }

    /// Every loaded plugin, in load order.
    pub fn in_load_order( &self ) -> impl Iterator<Item = &PluginDescriptor> {
        self.load_order.iter().filter_map(| id | self.descriptors.get( id ))
    }

    pub fn providers( &self, capability: &str ) -> impl Iterator<Item = &PluginId> {
        self.capabilities.providers( capability )
    }

    pub fn has_provider( &self, capability: &str ) -> bool { self.capabilities.has_provider( capability ) }

    pub fn capabilities( &self ) -> impl Iterator<Item = &crate::CapabilityId> { self.capabilities.capabilities() }

    pub fn handlers( &self, operation: &str ) -> &[Ranked<Handler>] { self.operations.handlers( operation ) }

    pub fn operations( &self ) -> impl Iterator<Item = &str> { self.operations.operations() }

}
