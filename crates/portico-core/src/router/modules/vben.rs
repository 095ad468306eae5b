use crate::kernel::constants::{
    ConstantsRegistry, GITHUB_URL, PROJECT_MANAGEMENT_URL, SUBJECT_MANAGEMENT_URL,
};
use crate::kernel::error::Result;
use crate::router::meta::{BadgeType, RouteMeta};
use crate::router::module::RouteModule;
use crate::router::route::RouteNode;

pub const MODULE_NAME: &str = "vben";

/// Project links: documentation, local projects and the embedded external systems.
///
/// The `VbenProject` group has neither a component nor a redirect, so navigating to
/// it directly fails; it only groups menu entries.
pub fn module(constants: &ConstantsRegistry) -> Result<RouteModule> {
    let project = RouteNode::new("VbenProject", "/vben-admin")
        .meta(
            RouteMeta::new()
                .badge(BadgeType::Dot)
                .icon("mdi:cube-outline")
                .order(9998)
                .title("demos.vben.title"),
        )
        .children([
            RouteNode::new("VbenDocument", "/vben-admin/document")
                .lazy("views/vben/document/index")
                .meta(
                    RouteMeta::new()
                        .icon("lucide:book-open-text")
                        .title("demos.vben.document"),
                ),
            RouteNode::new("VbenLocalProjects", "/vben-admin/projects")
                .lazy("views/vben/projects/index")
                .meta(RouteMeta::new().icon("lucide:folder").title("本地项目")),
            RouteNode::new("VbenGithub", "/vben-admin/github")
                .embedded(constants.require(GITHUB_URL)?)
                .meta(RouteMeta::new().icon("mdi:github").title("Github")),
            RouteNode::new("VbenNaive", "/vben-admin/naive")
                .embedded(constants.require(PROJECT_MANAGEMENT_URL)?)
                .meta(
                    RouteMeta::new()
                        .badge(BadgeType::Dot)
                        .icon("logos:naiveui")
                        .title("项目管理系统"),
                ),
            RouteNode::new("VbenElementPlus", "/vben-admin/ele")
                .embedded(constants.require(SUBJECT_MANAGEMENT_URL)?)
                .meta(
                    RouteMeta::new()
                        .badge(BadgeType::Dot)
                        .icon("logos:element")
                        .title("受试品管理系统"),
                ),
        ]);

    let about = RouteNode::new("VbenAbout", "/vben-admin/about")
        .lazy("views/_core/about/index")
        .meta(
            RouteMeta::new()
                .icon("lucide:copyright")
                .title("demos.vben.about")
                .order(9999),
        );

    Ok(RouteModule::new(MODULE_NAME, vec![project, about]))
}
