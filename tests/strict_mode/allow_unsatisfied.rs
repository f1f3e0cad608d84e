use plugin_link::{ Core, CoreConfig, InitError };
use tracing_test::traced_test ;
use crate::fixture_plugins::Fixture ;

fn tolerant() -> CoreConfig { CoreConfig::default().with_allow_unsatisfied( true ) }

#[test]
#[traced_test]
fn allow_unsatisfied_test_unknown_default_drops_dependant() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "consumer" ).requires( "storage", [ "ghost" ]),
		Fixture::new( "bystander" ),
	];
	let mut core = Core::with_config( catalog, tolerant() );

	core.load_all([ "consumer", "bystander" ]).unwrap();
	let report = core.init().unwrap();

	assert_eq!( report.dropped, [ "consumer" ]);
	assert_eq!( journal.inits(), [ "bystander" ]);
	assert!( logs_contain( "failed to load dependency" ));
	assert!( logs_contain( "dropping plugin with unsatisfied dependency" ));

}

#[test]
fn allow_unsatisfied_test_default_without_capability_drops_dependant() {

	let ( catalog, _ ) = fixtures![
		Fixture::new( "module_a" ),
		Fixture::new( "module_b" ).requires( "storage", [ "module_a" ]),
	];
	let mut core = Core::with_config( catalog, tolerant() );

	core.load( "module_b", true ).unwrap();
	let report = core.init().unwrap();

	assert_eq!( report.dropped, [ "module_b" ]);
	assert_eq!( report.initialised, [ "module_a" ]);

}

#[test]
#[traced_test]
fn allow_unsatisfied_test_failing_init_drops_plugin_and_dependants() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "module_a" ).implements( "storage" ).failing_init(),
		Fixture::new( "module_b" ).requires( "storage", [ "module_a" ]),
		Fixture::new( "module_c" ),
	];
	let mut core = Core::with_config( catalog, tolerant() );

	core.load_all([ "module_b", "module_c" ]).unwrap();
	let report = core.init().unwrap();

	assert_eq!( report.dropped, [ "module_a", "module_b" ]);
	assert_eq!( report.initialised, [ "module_c" ]);
	assert_eq!( journal.inits(), [ "module_a", "module_c" ]);
	assert!( core.get_by_interface( "storage" ).is_empty() );
	assert!( logs_contain( "plugin failed to initialise, dropping it" ));

}

#[test]
fn allow_unsatisfied_test_cycles_stay_fatal() {

	let ( catalog, _ ) = fixtures![
		Fixture::new( "left" ).depends_on( "right" ),
		Fixture::new( "right" ).depends_on( "left" ),
	];
	let mut core = Core::with_config( catalog, tolerant() );

	core.load( "left", true ).unwrap();

	assert!( matches!( core.init(), Err( InitError::CyclicDependency( _ ))));

}

#[test]
fn allow_unsatisfied_test_unknown_plugin_dependency_drops_dependant() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "mailer" ).depends_on( "ghost" ),
		Fixture::new( "newsletter" ).depends_on( "mailer" ),
		Fixture::new( "logger" ),
	];
	let mut core = Core::with_config( catalog, tolerant() );

	core.load_all([ "newsletter", "logger" ]).unwrap();
	let report = core.init().unwrap();

	assert_eq!( report.dropped, [ "mailer", "newsletter" ]);
	assert_eq!( report.initialised, [ "logger" ]);
	assert_eq!( journal.inits(), [ "logger" ]);

}
