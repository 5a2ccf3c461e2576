use proxygen::generator::{generate_readme, write_readme};
use proxygen::model::{ActionMethodMeta, ControllerMeta, DtoTypeMeta, ParameterMeta, TypeModel};
use std::fs;

fn order_controller() -> ControllerMeta {
    ControllerMeta {
        full_name: "Demo.Orders.OrderController".to_string(),
        actions: vec![
            ActionMethodMeta {
                name: "GetTotal".to_string(),
                return_type: Some("Money".to_string()),
                parameters: vec![ParameterMeta {
                    name: "orderId".to_string(),
                    type_name: "Guid".to_string(),
                }],
            },
            ActionMethodMeta {
                name: "Cancel".to_string(),
                return_type: None,
                parameters: vec![],
            },
        ],
    }
}

fn no_providers(_: &DtoTypeMeta) -> String {
    String::new()
}

fn all_providers(_: &DtoTypeMeta) -> String {
    "registration".to_string()
}

#[test]
fn test_full_document_without_provider_section() {
    let model = TypeModel::new(order_controller(), vec![]);
    let readme = generate_readme(&model, &no_providers).unwrap();
    let expected = "\
The Demo.Orders.OrderController.Proxy package is generated by « proxygen ».

To learn how to use it, visit: https://docs.rs/proxygen

HOW TO USE?
-------------------

Money result = await new Demo.Orders.OrderController().GetTotal(myorderId);

await new Demo.Orders.OrderController().Cancel();

PROXY CONFIGURATION OPTIONS:
-------------------
You can configure the proxy's behaviour when you create a proxy instance, before invoking the remote method.
For example:

new Demo.Orders.OrderController()
   .Retries(5)
   .Cache(CachePolicy.CacheOrFreshOrFail)
   .CircuitBreaker(exceptionsBeforeBreaking: 5, breakDurationSeconds: 10)
   ...;
";
    assert_eq!(readme, expected);
}

#[test]
fn test_no_provider_match_means_no_provider_heading() {
    let model = TypeModel::new(
        order_controller(),
        vec![DtoTypeMeta {
            full_name: "Demo.Orders.Order".to_string(),
        }],
    );
    let readme = generate_readme(&model, &no_providers).unwrap();
    assert!(!readme.contains("REMOTE DATA PROVIDER:"));
    assert!(!readme.contains("DataProvider"));
}

#[test]
fn test_provider_section_lists_matches_in_input_order() {
    let model = TypeModel::new(
        order_controller(),
        vec![
            DtoTypeMeta {
                full_name: "Demo.Orders.Order".to_string(),
            },
            DtoTypeMeta {
                full_name: "Demo.Orders.OrderLine".to_string(),
            },
        ],
    );
    let binder = |dto: &DtoTypeMeta| {
        if dto.full_name.ends_with("OrderLine") {
            String::new()
        } else {
            "registration".to_string()
        }
    };
    let readme = generate_readme(&model, &binder).unwrap();
    assert!(readme.contains("REMOTE DATA PROVIDER:\n-------------------\n"));
    assert!(readme.contains(
        "    Demo.Orders.OrderDataProvider\n      .Register(x => x.Cache(CachePolicy.CacheOrFreshOrFail, cacheExpiry: 1.Minutes()));"
    ));
    assert!(!readme.contains("OrderLineDataProvider"));
}

#[test]
fn test_duplicate_dto_types_render_one_snippet() {
    let model = TypeModel::new(
        order_controller(),
        vec![
            DtoTypeMeta {
                full_name: "Demo.Orders.Order".to_string(),
            },
            DtoTypeMeta {
                full_name: "Demo.Orders.Order".to_string(),
            },
        ],
    );
    let readme = generate_readme(&model, &all_providers).unwrap();
    assert_eq!(readme.matches("Demo.Orders.OrderDataProvider").count(), 1);
}

#[test]
fn test_section_order_is_fixed() {
    let model = TypeModel::new(
        order_controller(),
        vec![DtoTypeMeta {
            full_name: "Demo.Orders.Order".to_string(),
        }],
    );
    let readme = generate_readme(&model, &all_providers).unwrap();
    let intro = readme.find(".Proxy package is generated by").unwrap();
    let quick = readme.find("HOW TO USE?").unwrap();
    let config = readme.find("PROXY CONFIGURATION OPTIONS:").unwrap();
    let providers = readme.find("REMOTE DATA PROVIDER:").unwrap();
    assert!(intro < quick);
    assert!(quick < config);
    assert!(config < providers);
}

#[test]
fn test_generation_is_deterministic() {
    let model = TypeModel::new(
        order_controller(),
        vec![DtoTypeMeta {
            full_name: "Demo.Orders.Order".to_string(),
        }],
    );
    let first = generate_readme(&model, &all_providers).unwrap();
    let second = generate_readme(&model, &all_providers).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_action_name_fails_generation() {
    let model = TypeModel::new(
        ControllerMeta {
            full_name: "Api.Ctl".to_string(),
            actions: vec![ActionMethodMeta {
                name: String::new(),
                return_type: None,
                parameters: vec![],
            }],
        },
        vec![],
    );
    let err = generate_readme(&model, &no_providers).unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn test_write_readme_creates_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let model = TypeModel::new(order_controller(), vec![]);
    write_readme(dir.path(), &model, &no_providers).unwrap();
    let written = fs::read_to_string(dir.path().join("README.txt")).unwrap();
    assert_eq!(written, generate_readme(&model, &no_providers).unwrap());
}
