use plugin_link::Core ;
use crate::fixture_plugins::Fixture ;

#[test]
fn explicits_test_excludes_auto_loaded_dependencies() {

	let ( catalog, _ ) = fixtures![
		Fixture::new( "module_b" ).implements( "storage" ),
		Fixture::new( "module_c" ).requires( "storage", [ "module_b" ]),
	];
	let mut core = Core::new( catalog );

	core.load( "module_c", true ).unwrap();
	core.init().unwrap();

	assert_eq!( core.explicits(), [ "module_c" ]);
	assert_eq!( core.active_plugins(), [ "module_c", "module_b" ]);
	assert!( !core.get_by_name( "module_b" ).unwrap().is_explicit() );

}

#[test]
fn explicits_test_explicit_load_promotes_dependency() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_b" ).implements( "storage" ),
		Fixture::new( "module_c" ).requires( "storage", [ "module_b" ]),
	];
	let mut core = Core::new( catalog );

	core.load( "module_c", true ).unwrap();
	core.init().unwrap();
	core.load( "module_b", true ).unwrap();

	assert_eq!( core.explicits(), [ "module_c", "module_b" ]);
	assert_eq!( journal.count( "construct:module_b" ), 1 );

}

#[test]
fn explicits_test_non_explicit_load_is_not_listed() {

	let ( catalog, _ ) = fixtures![ Fixture::new( "module_a" ), Fixture::new( "module_b" )];
	let mut core = Core::new( catalog );

	core.load( "module_a", false ).unwrap();
	core.load( "module_b", true ).unwrap();
	core.load( "module_b", false ).unwrap();

	assert_eq!( core.explicits(), [ "module_b" ]);

}
