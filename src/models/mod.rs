mod about;
mod blog;
mod contact;
mod education;
mod experience;
mod profile;
mod project;
mod session;
mod skill;
mod technology;

pub use about::{About, CreateAbout, CreateQuote, Quote, UpdateAbout, UpdateQuote};
pub use blog::{
    Blog, BlogCategory, BlogCategoryCount, BlogStatus, CreateBlog, CreateBlogCategory, UpdateBlog,
    UpdateBlogCategory,
};
pub use contact::{Contact, CreateContact, UpdateContact};
pub use education::{CreateEducation, Education, UpdateEducation};
pub use experience::{CreateExperience, EmploymentType, Experience, UpdateExperience};
pub use profile::{Profile, ProfileDetails, UpdateProfile};
pub use project::{CreateProject, Project, ProjectStatus, UpdateProject};
pub use session::{Session, UserIdentity};
pub use skill::{CreateSkill, CreateSkillCategory, Skill, SkillCategory, UpdateSkill};
pub use technology::{CreateTechnology, Technology, UpdateTechnology};
