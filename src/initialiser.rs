//! Initialisation ordering.
//!
//! Every pending plugin is initialised after everything it depends on: the
//! plugins it names directly and every loaded provider of the capabilities it
//! requires. The walk keeps its own visited set and the chain of plugins
//! currently being visited, so a dependency cycle is reported instead of
//! recursing forever.

use std::collections::HashSet ;
use itertools::Itertools ;
use thiserror::Error ;

use crate::{ CapabilityId, LoadError, PluginError, PluginId };
use crate::registry::Registry ;



/// Errors that abort [`Core::init`]( crate::Core::init ).
#[derive( Error, Debug )]
pub enum InitError {
    /// A dependency could not be loaded.
    #[error( "Failed to load dependency: {0}" )]
    Load( #[from] LoadError ),
    /// A capability's default providers were loaded but none implements it.
    #[error( "Plugin '{plugin}' requires capability '{capability}' but its defaults don't provide it" )]
    UnsatisfiedDependency { plugin: PluginId, capability: CapabilityId },
    /// Plugins depend on each other in a loop. The first and last ids are the same.
    #[error( "Cyclic dependency: {}", .0.iter().join( " -> " ))]
    CyclicDependency( Vec<PluginId> ),
    /// A plugin's own `init` returned an error.
    #[error( "Failed to initialise plugin '{0}': {1}" )]
    InitFailed( PluginId, PluginError ),
}

/// Orders the pending plugins so that every plugin comes after its
/// dependencies. Pending plugins are visited in load order.
pub(crate) fn initialisation_order( registry: &Registry ) -> Result<Vec<PluginId>, InitError> {
    let mut walk = Walk { registry, visiting: Vec::new(), visited: HashSet::new(), order: Vec::new() };
    registry.pending().iter().try_for_each(| id | walk.visit( id ))?;
    Ok( walk.order )
}

struct Walk<'a> {
    registry: &'a Registry,
    visiting: Vec<PluginId>,
    visited: HashSet<PluginId>,
    order: Vec<PluginId>,
}

impl Walk<'_> {

    fn visit( &mut self, id: &PluginId ) -> Result<(), InitError> {

        if self.visited.contains( id ) { return Ok(()) }

        if let Some( start ) = self.visiting.iter().position(| visiting | visiting == id ) {
            let cycle = self.visiting[start..].iter().cloned().chain( std::iter::once( id.clone() )).collect();
            return Err( InitError::CyclicDependency( cycle ));
        }

        let registry = self.registry ;
        let Some( descriptor ) = registry.get( id.as_str() ) else { return Ok(()) };

        if descriptor.is_initialised() {
            self.visited.insert( id.clone() );
            return Ok(());
        }

        self.visiting.push( id.clone() );

        // Plugins with a missing dependency were dropped during resolution.
        for dependency in descriptor.dependencies().plugins() {
            debug_assert!( registry.contains( dependency.as_str() ), "unresolved dependency '{dependency}' of '{id}'" );
            self.visit( dependency )?;
        }

        for dependency in descriptor.dependencies().capabilities() {
            for provider in registry.providers( dependency.capability().as_str() ) {
                // Implementing a capability you also require is not a cycle.
                if provider != id { self.visit( provider )?; }
            }
        }

        self.visiting.pop();
        self.visited.insert( id.clone() );
        self.order.push( id.clone() );
        Ok(())

    }

}
