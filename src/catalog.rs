//! Table of constructible plugins.
//!
//! Plugins are loaded by name. The [`PluginCatalog`] is what gives a name its
//! meaning: it maps every known [`PluginId`] to a constructor. Construction
//! also captures the plugin's concrete type one last time, which is when its
//! [`Operations`] get bound to the shared instance.

use std::any::Any ;
use std::collections::HashMap ;
use std::sync::Arc ;
use thiserror::Error ;

use crate::{ PluginId, Plugin, PluginError, Operations };
use crate::plugin::Handler ;



/// Errors raised while resolving and constructing a plugin by name.
///
/// Nothing is registered when loading fails.
#[derive( Error, Debug )]
pub enum LoadError {
    /// No constructor is registered under this id.
    #[error( "Unknown plugin: '{0}'" )]
    UnknownPlugin( PluginId ),
    /// The constructor ran and returned an error.
    #[error( "Failed to construct plugin '{0}': {1}" )]
    ConstructionFailed( PluginId, PluginError ),
}

impl LoadError {
    /// The plugin that failed to load.
    pub fn plugin( &self ) -> &PluginId {
        match self { Self::UnknownPlugin( id ) | Self::ConstructionFailed( id, _ ) => id }
    }
}

/// A freshly constructed plugin, type-erased and ready for registration.
pub(crate) struct Constructed {
    pub instance: Arc<dyn Plugin>,
    pub any: Arc<dyn Any + Send + Sync>,
    pub operations: Vec<( String, Handler )>,
}

type Factory = Box<dyn Fn() -> Result<Constructed, PluginError> + Send + Sync>;

/// Maps plugin ids to their constructors.
///
/// ```
/// use plugin_link::{ PluginCatalog, Plugin };
///
/// #[derive( Default )]
/// struct Config ;
/// impl Plugin for Config {}
///
/// let catalog = PluginCatalog::new()
///     .with( "config", || Ok( Config ))
///     .with_default::<Config>( "config_copy" );
/// assert!( catalog.contains( "config" ));
/// assert!( !catalog.contains( "missing" ));
/// ```
#[derive( Default )]
pub struct PluginCatalog {
    factories: HashMap<PluginId, Factory>,
}

impl PluginCatalog {

    pub fn new() -> Self { Self::default() }

    /// Registers `constructor` under `id`, replacing any previous entry.
    pub fn register<P, F>( &mut self, id: impl Into<PluginId>, constructor: F ) -> &mut Self
    where
        P: Plugin,
        F: Fn() -> Result<P, PluginError> + Send + Sync + 'static,
    {
        let factory: Factory = Box::new( move || {
            let instance = Arc::new( constructor()? );
            let mut operations = Operations::new();
            instance.operations( &mut operations );
            Ok( Constructed {
                operations: operations.bind( &instance ),
                any: Arc::clone( &instance ) as Arc<dyn Any + Send + Sync>,
                instance: instance as Arc<dyn Plugin>,
            })
        });
        self.factories.insert( id.into(), factory );
        self
    }

    /// Builder form of [`register`]( Self::register ).
    pub fn with<P, F>( mut self, id: impl Into<PluginId>, constructor: F ) -> Self
    where
        P: Plugin,
        F: Fn() -> Result<P, PluginError> + Send + Sync + 'static,
    {
        self.register( id, constructor );
        self
    }

    /// Registers a plugin constructed through [`Default`].
    pub fn with_default<P: Plugin + Default>( self, id: impl Into<PluginId> ) -> Self {
        self.with( id, || Ok( P::default() ))
    }

    pub fn contains( &self, id: &str ) -> bool { self.factories.contains_key( id ) }

    /// Every registered id, in no particular order.
    pub fn ids( &self ) -> impl Iterator<Item = &PluginId> { self.factories.keys() }

    pub fn len( &self ) -> usize { self.factories.len() }

    pub fn is_empty( &self ) -> bool { self.factories.is_empty() }

    pub(crate) fn construct( &self, id: &PluginId ) -> Result<Constructed, LoadError> {
        let factory = self.factories.get( id ).ok_or_else(|| LoadError::UnknownPlugin( id.clone() ))?;
        factory().map_err(| err | LoadError::ConstructionFailed( id.clone(), err ))
    }

}

impl std::fmt::Debug for PluginCatalog {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "PluginCatalog" )
            .field( "plugins", &self.factories.keys().collect::<Vec<_>>() )
            .finish()
    }
}
