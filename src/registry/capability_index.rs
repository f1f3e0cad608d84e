use std::collections::HashMap ;

use crate::{ CapabilityId, PluginId, Priority };
use super::ranked::{ Ranked, insert_ranked };



/// Capability name → plugins implementing it, in dispatch order.
#[derive( Default )]
pub(crate) struct CapabilityIndex {
    entries: HashMap<CapabilityId, Vec<Ranked<()>>>,
}

impl CapabilityIndex {

    pub fn insert( &mut self, capability: CapabilityId, plugin: PluginId, priority: Priority, load_index: usize ) {
        insert_ranked(
            self.entries.entry( capability ).or_default(),
            Ranked { plugin, priority, load_index, value: () },
        );
    }

    pub fn providers( &self, capability: &str ) -> impl Iterator<Item = &PluginId> {
        self.entries.get( capability )
            .into_iter()
            .flat_map(| providers | providers.iter().map(| entry | &entry.plugin ))
    }

    pub fn has_provider( &self, capability: &str ) -> bool {
        self.entries.get( capability ).is_some_and(| providers | !providers.is_empty() )
    }

    /// Removes every entry owned by `plugin`. Capabilities left without
    /// providers are forgotten.
    pub fn retract( &mut self, plugin: &PluginId ) {
        self.entries.values_mut().for_each(| providers | providers.retain(| entry | entry.plugin != *plugin ));
        self.entries.retain(| _, providers | !providers.is_empty() );
    }

    pub fn capabilities( &self ) -> impl Iterator<Item = &CapabilityId> { self.entries.keys() }

}
