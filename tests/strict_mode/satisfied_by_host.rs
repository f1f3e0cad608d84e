use plugin_link::{ Core, CoreConfig };
use crate::fixture_plugins::Fixture ;

#[test]
fn strict_mode_test_host_loaded_dependencies_are_kept() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_a" ).implements( "test_interface" ),
		Fixture::new( "module_b" ).requires( "test_interface", [ "module_a" ]),
	];
	let mut core = Core::with_config( catalog, CoreConfig::strict() );

	core.load_all([ "module_b", "module_a" ]).unwrap();
	let report = core.init().unwrap();
	assert_no_drops!( report );

	assert_eq!( journal.inits(), [ "module_a", "module_b" ]);
	assert_eq!( core.explicits(), [ "module_b", "module_a" ]);

}

#[test]
fn strict_mode_test_dependency_loaded_before_second_init() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_a" ).implements( "test_interface" ),
		Fixture::new( "module_b" ).requires( "test_interface", [ "module_a" ]),
	];
	let mut core = Core::with_config( catalog, CoreConfig::strict() );

	core.load( "module_a", true ).unwrap();
	core.init().unwrap();
	core.load( "module_b", true ).unwrap();
	let report = core.init().unwrap();
	assert_no_drops!( report );

	assert_eq!( journal.inits(), [ "module_a", "module_b" ]);

}
