use crate::{ PluginId, Priority };



/// An entry contributed by a plugin to a provider list.
///
/// Provider lists are kept sorted so that dispatch never has to sort: highest
/// priority first, and among equal priorities the plugin loaded first.
#[derive( Clone )]
pub(crate) struct Ranked<T> {
    pub plugin: PluginId,
    pub priority: Priority,
    pub load_index: usize,
    pub value: T,
}

impl<T> Ranked<T> {
    #[inline] fn outranks<U>( &self, other: &Ranked<U> ) -> bool {
        self.priority > other.priority
            || ( self.priority == other.priority && self.load_index < other.load_index )
    }
}

/// Inserts `entry` behind every entry that outranks it.
pub(crate) fn insert_ranked<T>( list: &mut Vec<Ranked<T>>, entry: Ranked<T> ) {
    let position = list.partition_point(| existing | existing.outranks( &entry ));
    list.insert( position, entry );
}
