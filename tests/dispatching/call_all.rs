use plugin_link::{ Core, Val };
use tracing_test::traced_test ;
use crate::fixture_plugins::{ Fixture, Reply };

#[test]
fn call_all_test_invokes_every_handler() {

	let ( catalog, journal ) = fixtures![
		Fixture::new( "low" ).priority( -5 ).answers( "notify", Reply::Nothing ),
		Fixture::new( "plain" ).answers( "notify", Reply::Value( Val::Bool( true ))),
		Fixture::new( "high" ).priority( 5 ).answers( "notify", Reply::Echo ),
	];
	let mut core = Core::new( catalog );
	core.load_all([ "low", "plain", "high" ]).unwrap();
	assert_no_drops!( core.init().unwrap() );

	let invoked = core.call_all( "notify", &[ Val::from( "saved" )]).unwrap();

	assert_eq!( invoked, 3 );
	assert_eq!( journal.calls( "notify" ), [ "high", "plain", "low" ]);

}

#[test]
#[traced_test]
fn call_all_test_no_handler_is_not_an_error() {

	let ( catalog, journal ) = fixtures![ Fixture::new( "module_a" ).answers( "notify", Reply::Nothing )];
	let mut core = Core::new( catalog );
	core.load( "module_a", true ).unwrap();
	core.init().unwrap();

	assert_eq!( core.call_all( "unheard_of", &[] ).unwrap(), 0 );
	assert!( journal.calls( "notify" ).is_empty() );
	assert!( logs_contain( "call_all: no handler registered" ));

}
