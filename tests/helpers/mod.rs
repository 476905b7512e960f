// Test Helper Modules for Real Endpoint Testing
//
// Shared by the integration tests. Each test binary includes this module with
// `#[path = "../helpers/mod.rs"] mod helpers;` and uses only part of it.
//
// Example:
//   #[actix_web::test]
//   async fn test_estimate() {
//       let srv = spawn_test_server();
//       let response = srv.post("/api/estimates")
//           .send_json(&TestDataFactory::single_consultation())
//           .await
//           .unwrap();
//       assert_ok(&response);
//   }

#![allow(dead_code)]

pub mod assertions;

pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
