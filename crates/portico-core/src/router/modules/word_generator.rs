use crate::router::meta::RouteMeta;
use crate::router::module::RouteModule;
use crate::router::route::RouteNode;

pub const MODULE_NAME: &str = "word-generator";

/// Project plan generator
pub fn module() -> RouteModule {
    RouteModule::new(
        MODULE_NAME,
        vec![
            RouteNode::new("WordGenerator", "/word-generator")
                .redirect("/word-generator/index")
                .meta(
                    RouteMeta::new()
                        .icon("mdi:file-document-outline")
                        .keep_alive(true)
                        .order(1)
                        .title("Word方案生成器"),
                )
                .child(
                    RouteNode::new("WordGeneratorIndex", "/word-generator/index")
                        .lazy("views/word-generator/index")
                        .meta(
                            RouteMeta::new()
                                .affix_tab(1)
                                .icon("mdi:file-document-edit-outline")
                                .title("项目方案生成")
                                .keep_alive(true),
                        ),
                ),
        ],
    )
}
