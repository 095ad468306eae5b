use crate::router::meta::RouteMeta;
use crate::router::module::RouteModule;
use crate::router::route::RouteNode;

pub const MODULE_NAME: &str = "report-generator";

/// Project report generator
pub fn module() -> RouteModule {
    RouteModule::new(
        MODULE_NAME,
        vec![
            RouteNode::new("ReportGenerator", "/Report-generator")
                .redirect("/Report-generator/index")
                .meta(
                    RouteMeta::new()
                        .icon("mdi:file-chart-outline")
                        .keep_alive(true)
                        .order(2)
                        .title("Word报告生成器"),
                )
                .child(
                    RouteNode::new("ReportGeneratorIndex", "/Report-generator/index")
                        .lazy("views/Report-generator/index")
                        .meta(
                            RouteMeta::new()
                                .affix_tab(2)
                                .icon("mdi:file-document-multiple-outline")
                                .title("项目报告生成")
                                .keep_alive(true),
                        ),
                ),
        ],
    )
}
