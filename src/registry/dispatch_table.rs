use std::collections::HashMap ;

use crate::{ PluginId, Priority };
use crate::plugin::Handler ;
use super::ranked::{ Ranked, insert_ranked };



/// Operation name → bound handlers, in dispatch order.
#[derive( Default )]
pub(crate) struct DispatchTable {
    entries: HashMap<String, Vec<Ranked<Handler>>>,
}

impl DispatchTable {

    pub fn insert( &mut self, operation: String, plugin: PluginId, priority: Priority, load_index: usize, handler: Handler ) {
        insert_ranked(
            self.entries.entry( operation ).or_default(),
            Ranked { plugin, priority, load_index, value: handler },
        );
    }

    pub fn handlers( &self, operation: &str ) -> &[Ranked<Handler>] {
        self.entries.get( operation ).map( Vec::as_slice ).unwrap_or_default()
    }

    pub fn retract( &mut self, plugin: &PluginId ) {
        self.entries.values_mut().for_each(| handlers | handlers.retain(| entry | entry.plugin != *plugin ));
        self.entries.retain(| _, handlers | !handlers.is_empty() );
    }

    pub fn operations( &self ) -> impl Iterator<Item = &str> { self.entries.keys().map( String::as_str ) }

}
